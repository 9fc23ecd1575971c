//! End-to-end rendering tests replayed through a terminal model.

use termbo::{EscapeSequence, Error, FrameRenderer};

use crate::helpers::{progress_line, Screen};

// ============================================================================
// Redraw in place
// ============================================================================

#[test]
fn progress_bar_redraws_single_line_in_place() {
    let mut renderer = FrameRenderer::new(27, 4).unwrap();
    let mut screen = Screen::new();
    let up = EscapeSequence::CursorUp(1).to_string();

    for percent in 1..=100 {
        let out = renderer.render(&[progress_line(27, percent)]);
        assert!(out.ends_with(&up), "frame {} did not rewind", percent);
        screen.feed(out.as_bytes());
        assert_eq!(screen.cursor(), (0, 0));
    }

    let end = renderer.end_sequence();
    assert_eq!(end, "\x1b[1B");
    screen.feed(end.as_bytes());

    assert_eq!(screen.lines(), vec![format!("[{}]", ">".repeat(25))]);
    assert_eq!(screen.cursor(), (1, 0));
}

#[test]
fn growing_frames_stay_inside_region() {
    let mut renderer = FrameRenderer::new(6, 3).unwrap();
    let mut screen = Screen::new();

    let frames: Vec<Vec<&str>> = vec![
        vec!["[>---]"],
        vec!["[>>>>]", "[>---]"],
        vec!["[>>>>]", "[>>>>]", "[>---]"],
        vec!["[>>>>]", "[>>>>]", "[>>>>]", "[>---]"],
    ];
    for frame in &frames {
        screen.feed(renderer.render(frame).as_bytes());
    }
    let mut sink: Vec<u8> = Vec::new();
    renderer.end(&mut sink).unwrap();
    screen.feed(&sink);

    assert_eq!(screen.lines(), vec!["[>>>>]", "[>>>>]", "[>>>>]"]);
    assert_eq!(screen.cursor(), (3, 0));
}

#[test]
fn shorter_frame_leaves_previous_rows_untouched() {
    let mut renderer = FrameRenderer::new(5, 2).unwrap();
    let mut screen = Screen::new();

    screen.feed(renderer.render(&["aaa", "bbb"]).as_bytes());
    screen.feed(renderer.render(&["c"]).as_bytes());

    // No erase sequences are emitted; only overwritten cells change.
    assert_eq!(screen.lines(), vec!["caa", "bbb"]);
    assert_eq!(renderer.previous_frame_lines(), 1);
}

#[test]
fn clear_then_end_leaves_blank_region_above_cursor() {
    let mut renderer = FrameRenderer::new(4, 2).unwrap();
    let mut screen = Screen::new();
    let mut sink: Vec<u8> = Vec::new();

    renderer.render_to(&mut sink, &["abcd", "efgh"]).unwrap();
    renderer.clear(&mut sink).unwrap();
    renderer.end(&mut sink).unwrap();
    screen.feed(&sink);

    assert_eq!(screen.lines(), vec!["", ""]);
    assert_eq!(screen.cursor(), (2, 0));
}

// ============================================================================
// Exact output
// ============================================================================

#[test]
fn clear_on_five_by_two_region() {
    let mut renderer = FrameRenderer::new(5, 2).unwrap();
    let mut sink: Vec<u8> = Vec::new();
    renderer.clear(&mut sink).unwrap();
    assert_eq!(sink, b"     \n     \n\x1b[2A");
}

#[test]
fn snapshot_clipped_frame() {
    let mut renderer = FrameRenderer::new(3, 2).unwrap();
    let out = renderer.render(&["ab", "cdef", "dropped"]);
    insta::assert_snapshot!(out.escape_debug().to_string(), @r"ab\ncd\n\u{1b}[2A");
}

#[test]
fn only_cursor_movement_sequences_are_emitted() {
    let mut renderer = FrameRenderer::new(10, 3).unwrap();
    let mut screen = Screen::new();
    screen.feed(renderer.render(&["one", "two"]).as_bytes());
    screen.feed(renderer.render(&["three"]).as_bytes());
    screen.feed(renderer.end_sequence().as_bytes());

    let actions: Vec<(char, Vec<u16>)> = screen
        .csi()
        .iter()
        .map(|c| (c.action, c.params.clone()))
        .collect();
    assert_eq!(actions, vec![('A', vec![2]), ('A', vec![1]), ('B', vec![1])]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn zero_sized_region_is_rejected() {
    for (w, h) in [(0, 0), (0, 1), (1, 0)] {
        match FrameRenderer::new(w, h) {
            Err(Error::InvalidBounds { width, height }) => {
                assert_eq!((width, height), (w, h));
            }
            other => panic!("expected InvalidBounds for {}x{}, got {:?}", w, h, other),
        }
    }
}

#[test]
fn end_after_construction_moves_down_zero() {
    let renderer = FrameRenderer::new(8, 8).unwrap();
    let mut sink: Vec<u8> = Vec::new();
    renderer.end(&mut sink).unwrap();
    assert_eq!(sink, EscapeSequence::CursorDown(0).to_string().as_bytes());
}
