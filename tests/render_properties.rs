//! Property-based invariant tests for rendering and composition.
//!
//! These tests verify structural invariants across the crate:
//!
//! 1. Fixed boxes measure content plus frame, exactly
//! 2. join_horizontal height is the tallest block, width the sum
//! 3. join_vertical width is the widest block, height the sum
//! 4. place never clips and always fills its canvas
//! 5. Spacing shorthand forms are interchangeable
//! 6. Negative spacing and dimensions clamp to zero
//! 7. Mutators never touch the receiver
//! 8. Rendering and composition are deterministic
//! 9. Styling never changes visible width
//! 10. Truncation and wrapping respect width ceilings

use proptest::prelude::*;
use spark_gloss::{
    Block, Border, Color, HAlign, Style, VAlign, join_horizontal, join_vertical, place,
    string_height, string_width, strip_ansi, truncate_text, wrap_text,
};

// ── Strategies ──────────────────────────────────────────────────────────────

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 1..5).prop_map(|lines| lines.join("\n"))
}

fn mixed_width_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("a"),
            Just(" "),
            Just("你"),
            Just("é"),
            Just("🎉"),
            Just("👍🏽"),
        ],
        0..24,
    )
    .prop_map(|pieces| pieces.concat())
}

fn h_align_strategy() -> impl Strategy<Value = HAlign> {
    prop_oneof![Just(HAlign::Left), Just(HAlign::Center), Just(HAlign::Right)]
}

fn v_align_strategy() -> impl Strategy<Value = VAlign> {
    prop_oneof![Just(VAlign::Top), Just(VAlign::Center), Just(VAlign::Bottom)]
}

fn line_widths(s: &str) -> Vec<usize> {
    s.split('\n').map(string_width).collect()
}

// ═════════════════════════════════════════════════════════════════════════════
// 1. Fixed boxes measure content plus frame, exactly
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fixed_box_measures_content_plus_frame(
        text in text_strategy(),
        width in 0i32..20,
        height in 1i32..8,
        padding in (0i32..4, 0i32..4, 0i32..4, 0i32..4),
        margin in 0i32..3,
        bordered in any::<bool>(),
        h in h_align_strategy(),
        v in v_align_strategy(),
    ) {
        let (pt, pr, pb, pl) = padding;
        let mut style = Style::new()
            .width(width)
            .height(height)
            .align(h)
            .align_vertical(v)
            .padding((pt, pr, pb, pl))
            .margin(margin);
        if bordered {
            style = style.border(Border::NORMAL);
        }
        let out = style.render(&text);

        let expected_width = width as usize + style.horizontal_frame_size();
        let expected_height = height as usize + style.vertical_frame_size();
        prop_assert_eq!(string_height(&out), expected_height);
        for (i, w) in line_widths(&out).into_iter().enumerate() {
            prop_assert_eq!(w, expected_width, "line {} width mismatch", i);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// 2. join_horizontal height is the tallest block, width the sum
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn join_horizontal_keeps_block_geometry(
        texts in prop::collection::vec(text_strategy(), 2..5),
        align in v_align_strategy(),
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let joined = join_horizontal(align, &refs);

        let blocks: Vec<Block> = texts.iter().map(|t| Block::from_rendered(t)).collect();
        let tallest = blocks.iter().map(Block::height).max().unwrap_or(0);
        let total: usize = blocks.iter().map(Block::width).sum();

        prop_assert_eq!(string_height(&joined), tallest);
        for w in line_widths(&joined) {
            prop_assert_eq!(w, total);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// 3. join_vertical width is the widest block, height the sum
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn join_vertical_keeps_block_geometry(
        texts in prop::collection::vec(text_strategy(), 2..5),
        align in h_align_strategy(),
    ) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let joined = join_vertical(align, &refs);

        let blocks: Vec<Block> = texts.iter().map(|t| Block::from_rendered(t)).collect();
        let widest = blocks.iter().map(Block::width).max().unwrap_or(0);
        let total: usize = blocks.iter().map(Block::height).sum();

        prop_assert_eq!(string_height(&joined), total);
        for w in line_widths(&joined) {
            prop_assert_eq!(w, widest);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// 4. place never clips and always fills its canvas
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn place_never_clips(
        text in text_strategy(),
        width in 0i32..16,
        height in 0i32..8,
        h in h_align_strategy(),
        v in v_align_strategy(),
    ) {
        let placed = place(width, height, h, v, &text);
        let block = Block::from_rendered(&text);
        let expected_width = block.width().max(width as usize);
        let expected_height = block.height().max(height as usize);

        prop_assert_eq!(string_height(&placed), expected_height);
        for w in line_widths(&placed) {
            prop_assert_eq!(w, expected_width);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// 5. Spacing shorthand forms are interchangeable
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn spacing_shorthand_forms_agree(
        n in 0i32..6,
        text in text_strategy(),
    ) {
        let uniform = Style::new().padding(n);
        prop_assert_eq!(uniform, Style::new().padding((n, n)));
        prop_assert_eq!(uniform, Style::new().padding((n, n, n, n)));
        prop_assert_eq!(uniform, Style::new().padding(&[n][..]));
        prop_assert_eq!(
            uniform.render(&text),
            Style::new().padding((n, n)).render(&text)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// 6. Negative spacing and dimensions clamp to zero
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn negative_inputs_clamp_to_zero(
        k in 1i32..50,
        text in text_strategy(),
    ) {
        prop_assert_eq!(Style::new().padding(-k), Style::new().padding(0));
        prop_assert_eq!(Style::new().margin(-k), Style::new().margin(0));
        prop_assert_eq!(
            Style::new().width(-k).render(&text),
            Style::new().width(0).render(&text)
        );
        prop_assert_eq!(
            Style::new().height(-k).render(&text),
            Style::new().height(0).render(&text)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// 7. Mutators never touch the receiver
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mutators_never_touch_the_receiver(
        width in 0i32..20,
        bold in any::<bool>(),
    ) {
        let style = Style::new().width(width).bold(bold);
        let snapshot = style;
        let _ = style
            .italic(true)
            .width(width + 5)
            .padding(2)
            .border(Border::THICK)
            .unset_bold();
        prop_assert_eq!(style, snapshot);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// 8. Rendering and composition are deterministic
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendering_is_deterministic(
        text in text_strategy(),
        width in 0i32..20,
    ) {
        let style = Style::new().width(width).padding((1, 2)).border(Border::ROUNDED);
        prop_assert_eq!(style.render(&text), style.render(&text));

        let refs = [text.as_str(), "fixed"];
        prop_assert_eq!(
            join_horizontal(VAlign::Top, &refs),
            join_horizontal(VAlign::Top, &refs)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// 9. Styling never changes visible width
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn styling_never_changes_visible_width(
        text in "[a-zA-Z0-9 ]{0,24}",
        color in 0u8..=15,
    ) {
        let styled = Style::new()
            .bold(true)
            .foreground(Color::Ansi(color))
            .render(&text);
        prop_assert_eq!(string_width(&styled), string_width(&text));
        let stripped = strip_ansi(&styled);
        prop_assert_eq!(stripped.as_ref(), text.as_str());
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// 10. Truncation and wrapping respect width ceilings
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn truncation_and_wrapping_respect_ceilings(
        text in mixed_width_strategy(),
        limit in 0usize..12,
    ) {
        let cut = truncate_text(&text, limit);
        prop_assert!(string_width(&cut) <= limit);
        // No styling in the input, so the cut is a plain prefix.
        prop_assert!(text.starts_with(&cut));

        if limit > 0 {
            // A single grapheme wider than the limit sits alone on its
            // line; the widest grapheme here is 2 cells.
            let ceiling = limit.max(2);
            for line in wrap_text(&text, limit) {
                prop_assert!(
                    string_width(&line) <= ceiling,
                    "wrapped line {:?} wider than {}",
                    line,
                    ceiling
                );
            }
        }
    }
}
