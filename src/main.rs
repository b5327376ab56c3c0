/// Native harness: drop files from disk onto an image-input widget
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use image_input::data_url;
    use image_input::native::NativeWidget;
    use image_input::WidgetConfig;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let mut native = NativeWidget::new(WidgetConfig::default(), args.default_source);
    native.drop_paths(args.files.as_slice());
    native.run_until_idle();
    if args.reset {
        native.reset();
        native.run_until_idle();
    }

    let host = native.host();
    for alert in &host.alerts {
        println!("alert: {}", alert);
    }
    println!("source: {:?}", data_url::abbreviate(&host.source, 48));
    println!("dragover: {}", host.drag_over);
    println!(
        "reset link: {}",
        if host.reset_visible { "visible" } else { "hidden" }
    );
}

#[cfg(not(target_arch = "wasm32"))]
const USAGE: &str = "usage: image-input-native [--default SRC] [--reset] FILE...";

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    default_source: Option<String>,
    reset: bool,
    files: Vec<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--default" => {
                    let value = args.next().ok_or("--default needs a value")?;
                    parsed.default_source = Some(value);
                }
                "--reset" => parsed.reset = true,
                "-h" | "--help" => return Err(String::from("image-input-native")),
                flag if flag.starts_with("--") => return Err(format!("unknown flag {}", flag)),
                _ => parsed.files.push(arg),
            }
        }
        Ok(parsed)
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let args = parse(&["--default", "unknown.png", "a.jpg", "--reset", "b.png"]).unwrap();
        assert_eq!(args.default_source.as_deref(), Some("unknown.png"));
        assert!(args.reset);
        assert_eq!(args.files, vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--default"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }
}
