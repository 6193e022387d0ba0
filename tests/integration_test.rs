use rcarousel::{read_feed, Banner, BannerFeed, FeedReader, FeedSource, FeedWriter, VirtualFeedSource};
use rcarousel::{CarouselConfig, ManualClock, Phase, RotatingCarousel, ScrollViewport};
use anyhow::Result;
use std::cell::RefCell;
use std::env;
use std::fs;
use std::rc::Rc;

#[derive(Default)]
struct RecordingViewport {
    commands: Vec<(f32, bool)>,
}

impl ScrollViewport for RecordingViewport {
    fn scroll_to(&mut self, offset: f32, animated: bool) {
        self.commands.push((offset, animated));
    }
}

fn sample_feed() -> BannerFeed {
    let mut bait = Banner::new("bait", "Live Bait In Stock", "Cape Fear Bait & Tackle");
    bait.subtitle = Some("Shrimp and mullet daily".to_string());
    bait.link_url = Some("https://example.com/bait".to_string());

    let mut charter = Banner::new("charter", "Gulf Stream Charters", "Hatteras Charter Co.");
    charter.color = "#2980B9".to_string();

    let kayak = Banner::new("kayak", "Kayak Rentals", "Crystal Coast Kayaks");

    BannerFeed::new("integration test", vec![bait, charter, kayak])
}

fn mount(
    banners: Vec<Banner>,
) -> (RotatingCarousel<Banner, RecordingViewport, ManualClock>, Rc<RefCell<RecordingViewport>>, ManualClock) {
    let viewport = Rc::new(RefCell::new(RecordingViewport::default()));
    let clock = ManualClock::new();
    let config = CarouselConfig {
        item_width: 300.0,
        item_gap: 20.0,
        ..Default::default()
    };
    let carousel = RotatingCarousel::new(banners, config, Rc::downgrade(&viewport), clock.clone());
    (carousel, viewport, clock)
}

#[test]
fn test_write_and_read_plain_feed() -> Result<()> {
    let test_file = env::temp_dir().join("rcarousel_test_feed.json");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    let feed = sample_feed();
    FeedWriter::new(test_file)?.write(&feed)?;

    let loaded = read_feed(test_file)?;
    assert_eq!(loaded, feed);
    assert_eq!(loaded.banners[0].subtitle.as_deref(), Some("Shrimp and mullet daily"));
    assert_eq!(loaded.banners[2].color, "#2C3E50");

    // Plain output is readable JSON
    let text = fs::read_to_string(test_file)?;
    assert!(text.contains("\"Gulf Stream Charters\""));

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_write_and_read_brotli_feed() -> Result<()> {
    let test_file = env::temp_dir().join("rcarousel_test_feed.json.br");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    let feed = VirtualFeedSource::with_count(9, 6).generate();
    FeedWriter::new(test_file)?.write(&feed)?;

    // Compressed bytes are not JSON
    let bytes = fs::read(test_file)?;
    assert!(serde_json::from_slice::<serde_json::Value>(&bytes).is_err());

    let loaded = FeedReader::new().load(test_file)?;
    assert_eq!(loaded, feed);

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_duplicate_ids_rejected_on_write_and_read() -> Result<()> {
    let test_file = env::temp_dir().join("rcarousel_test_duplicate.json");
    let test_file = test_file.to_str().unwrap();

    let mut feed = sample_feed();
    feed.banners[1].id = "bait".to_string();
    assert!(FeedWriter::new(test_file)?.write(&feed).is_err());

    fs::write(
        test_file,
        r#"{"version":"1.0","banners":[{"id":"a","title":"T","sponsor":"S"},{"id":"a","title":"U","sponsor":"S"}]}"#,
    )?;
    let err = read_feed(test_file).unwrap_err();
    assert!(format!("{:#}", err).contains("duplicate"));

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_missing_feed_file_reports_path() {
    let err = read_feed("/nonexistent/rcarousel/feed.json").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/rcarousel/feed.json"));
}

#[test]
fn test_feed_drives_full_rotation() -> Result<()> {
    let feed = sample_feed();
    let (mut carousel, viewport, clock) = mount(feed.banners.clone());

    let ids: Vec<&str> = carousel.render_sequence().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["kayak", "bait", "charter", "kayak", "bait"]);
    assert_eq!(viewport.borrow().commands, vec![(320.0, false)]);

    // One full lap of auto-advance ends back on the first banner.
    for expected in [1, 2, 0] {
        clock.advance_ms(5000);
        assert!(carousel.poll().ticked);
        assert_eq!(carousel.current_index(), expected);
    }
    assert_eq!(viewport.borrow().commands.last(), Some(&(320.0, true)));
    assert_eq!(carousel.current_item().map(|b| b.id.as_str()), Some("bait"));
    Ok(())
}

#[test]
fn test_swipe_past_end_wraps_and_resumes() {
    let (mut carousel, viewport, clock) = mount(sample_feed().banners);

    carousel.on_drag_start();
    clock.advance_ms(20_000);
    assert!(!carousel.poll().any());

    // Released on the clone of the first banner at the back (render index 4).
    assert!(carousel.on_momentum_scroll_end(4.0 * 320.0));
    assert_eq!(carousel.phase(), Phase::ProgrammaticJump);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(viewport.borrow().commands.last(), Some(&(320.0, false)));

    // The instantaneous reposition reports a scroll end of its own.
    assert!(!carousel.on_momentum_scroll_end(320.0));

    clock.advance_ms(50);
    let outcome = carousel.poll();
    assert!(outcome.jump_settled);
    assert_eq!(carousel.phase(), Phase::CoolingDown);

    clock.advance_ms(950);
    assert!(carousel.poll().resumed);
    assert!(carousel.is_auto_rotating());

    clock.advance_ms(5000);
    assert!(carousel.poll().ticked);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_single_banner_never_rotates() {
    let banner = Banner::new("only", "Pier Passes", "Topsail Pier Shop");
    let (mut carousel, viewport, clock) = mount(vec![banner]);

    assert_eq!(carousel.render_sequence().len(), 1);
    assert!(viewport.borrow().commands.is_empty());
    assert!(carousel.next_deadline().is_none());

    clock.advance_ms(60_000);
    assert!(!carousel.poll().any());
    assert!(!carousel.tick());
    assert_eq!(carousel.on_item_pressed(0).map(|b| b.id.as_str()), Some("only"));
}

#[test]
fn test_empty_feed_is_inert() {
    let (mut carousel, viewport, clock) = mount(Vec::new());

    assert!(carousel.is_empty());
    assert!(carousel.current_item().is_none());
    assert!(!carousel.on_momentum_scroll_end(0.0));
    assert!(carousel.on_item_pressed(0).is_none());

    clock.advance_ms(60_000);
    assert!(!carousel.poll().any());
    assert!(viewport.borrow().commands.is_empty());
}

#[test]
fn test_tap_on_clone_selects_real_banner() {
    let selected = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&selected);
    let (carousel, _viewport, _clock) = mount(sample_feed().banners);
    let mut carousel = carousel.with_on_select(move |banner: &Banner| sink.borrow_mut().push(banner.id.clone()));

    carousel.on_item_pressed(0);
    carousel.on_item_pressed(4);
    carousel.on_item_pressed(2);
    assert!(carousel.on_item_pressed(5).is_none());

    assert_eq!(*selected.borrow(), vec!["kayak", "bait", "charter"]);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_dispose_twice_and_outlive_viewport() {
    let (mut carousel, viewport, clock) = mount(sample_feed().banners);

    // Surface goes away first; timers keep firing without panicking.
    drop(viewport);
    clock.advance_ms(5000);
    assert!(carousel.poll().ticked);
    assert_eq!(carousel.current_index(), 1);

    assert!(carousel.dispose());
    assert!(!carousel.dispose());
    clock.advance_ms(60_000);
    assert!(!carousel.poll().any());
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_virtual_feed_deterministic() {
    let a = VirtualFeedSource::with_config(123, 3, 8).generate();
    let b = VirtualFeedSource::with_config(123, 3, 8).load("ignored").unwrap();
    let c = VirtualFeedSource::with_config(124, 3, 8).generate();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.validate().is_ok());
}
