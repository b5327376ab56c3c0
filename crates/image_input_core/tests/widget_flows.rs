//! End-to-end widget flows against a scripted page.

mod support;

use image_input_core::data_url;
use image_input_core::{EventOutcome, Key, DEFAULT_UNSUPPORTED_MESSAGE};
use support::{jpeg, jpg_upper, png, text, Page};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_click_then_pick_jpeg() {
    init_logging();
    let mut page = Page::new(Some("unknown.png"));

    assert!(page.click().is_pass());
    assert!(page.host.picker_present);
    assert_eq!(page.host.focus_count, 1);

    let outcome = page.pick(vec![jpeg("holiday.jpg")]);
    assert_eq!(outcome, EventOutcome::suppress());
    assert!(!page.host.picker_present, "picker is removed after one use");
    assert!(page.host.drag_over, "drag-over stays on while loading");

    page.run_until_idle();
    assert!(data_url::is_data_url(&page.host.source));
    assert!(page.host.source.starts_with("data:image/jpeg;base64,"));
    assert_eq!(page.widget.source(), page.host.source);
    assert!(!page.host.drag_over);
    assert_eq!(page.host.reset_visible, Some(true));
    assert!(page.host.alerts.is_empty());
}

#[test]
fn test_space_then_pick_jpeg() {
    let mut page = Page::new(None);

    assert_eq!(page.press(Key::Space), EventOutcome::suppress());
    assert_eq!(page.host.pickers_opened, 1);

    page.pick(vec![jpg_upper("scan.JPG")]);
    page.run_until_idle();
    assert!(data_url::is_data_url(&page.host.source));
    assert!(!page.host.drag_over);
}

#[test]
fn test_drop_jpeg() {
    let mut page = Page::new(Some("unknown.png"));

    assert_eq!(page.drop_files(vec![jpeg("dropped.jpeg")]), EventOutcome::suppress());
    page.run_until_idle();

    assert!(data_url::is_data_url(&page.host.source));
    assert!(!page.host.drag_over);
    assert_eq!(page.host.pickers_opened, 0);
}

#[test]
fn test_no_jpeg_leaves_source_unchanged() {
    let lists = vec![vec![], vec![png("a.png")], vec![png("a.png"), text("b.txt")]];
    for files in lists {
        let count = files.len();
        let mut page = Page::new(Some("unknown.png"));
        page.drop_files(files);
        page.run_until_idle();

        assert_eq!(page.host.source, "unknown.png");
        assert!(!page.host.drag_over);
        assert_eq!(page.host.alerts.len(), count);
    }
}

#[test]
fn test_one_warning_before_jpeg() {
    let mut page = Page::new(None);
    page.drop_files(vec![png("first.png"), jpeg("second.jpg")]);
    page.run_until_idle();

    assert_eq!(page.host.alerts, vec![DEFAULT_UNSUPPORTED_MESSAGE.to_string()]);
    assert!(data_url::is_data_url(&page.host.source));
}

#[test]
fn test_no_warning_when_jpeg_first() {
    let first = jpeg("first.jpg");
    let expected = data_url::encode(&first.mime_type, &first.bytes);

    let mut page = Page::new(None);
    page.drop_files(vec![first, png("second.png")]);
    page.run_until_idle();

    assert!(page.host.alerts.is_empty());
    assert_eq!(page.host.source, expected);
}

#[test]
fn test_non_space_keys_do_nothing() {
    let mut page = Page::new(None);
    for code in [13, 27, 65, 9] {
        assert!(page.press(Key::from_code(code)).is_pass());
    }
    assert_eq!(page.host.pickers_opened, 0);
    assert!(!page.widget.is_picker_open());
}

#[test]
fn test_cancelled_picker_is_removed_without_acceptance() {
    let mut page = Page::new(Some("unknown.png"));
    page.click();
    page.cancel_picker();
    page.run_until_idle();

    assert!(!page.host.picker_present);
    assert_eq!(page.host.source, "unknown.png");
    assert!(!page.host.drag_over);
    assert_eq!(page.release(Key::Escape), EventOutcome::suppress());

    // A new activation works after a cancel
    page.click();
    assert_eq!(page.host.pickers_opened, 2);
}

#[test]
fn test_reset_to_default() {
    let mut page = Page::new(Some("unknown.png"));
    page.drop_files(vec![jpeg("a.jpg")]);
    page.run_until_idle();
    assert_eq!(page.host.reset_visible, Some(true));

    let focus_before = page.host.focus_count;
    assert_eq!(page.reset(), EventOutcome::suppress());
    page.run_until_idle();

    assert_eq!(page.host.source, "unknown.png");
    assert_eq!(page.host.reset_visible, Some(false));
    assert_eq!(page.host.focus_count, focus_before + 1);
}

#[test]
fn test_attach_hides_reset_link_at_default() {
    let page = Page::new(Some("unknown.png"));
    assert_eq!(page.host.reset_visible, Some(false));
}

#[test]
fn test_scenario_png_dropped_on_default() {
    let mut page = Page::new(Some("unknown.png"));
    page.drop_files(vec![png("logo.png")]);
    page.run_until_idle();

    assert_eq!(page.host.alerts.len(), 1);
    assert_eq!(page.host.source, "unknown.png");
    assert!(!page.host.drag_over);
}

#[test]
fn test_scenario_no_default_accept_then_reset() {
    let mut page = Page::new(None);
    page.click();
    page.pick(vec![jpeg("me.jpg")]);
    page.run_until_idle();
    assert_eq!(page.host.reset_visible, Some(true));

    page.reset();
    page.run_until_idle();
    assert_eq!(page.host.source, "");
    assert_eq!(page.host.reset_visible, Some(false));
}

#[test]
fn test_failed_read_keeps_prior_state() {
    let mut page = Page::new(Some("unknown.png"));
    page.host.fail_reads = true;
    page.drop_files(vec![jpeg("broken.jpg")]);
    page.run_until_idle();

    assert_eq!(page.host.source, "unknown.png");
    assert!(!page.host.drag_over);
    assert!(page.host.alerts.is_empty());
}

#[test]
fn test_later_read_wins() {
    let older = jpeg("older.jpg");
    let newer = jpg_upper("newer.jpg");
    let expected = data_url::encode(&newer.mime_type, &newer.bytes);

    let mut page = Page::new(None);
    page.drop_files(vec![older]);
    page.drop_files(vec![newer]);
    page.run_until_idle();

    assert_eq!(page.host.source, expected);
    assert!(!page.host.drag_over);
}
