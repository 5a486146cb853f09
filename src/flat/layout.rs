use raylib::prelude::*;

use crate::constants::*;

pub const SKILL_COLUMNS: usize = 4;
pub const SKILL_CARD: Vector2 = Vector2 { x: 220.0, y: 170.0 };
pub const SKILL_STAGGER: f32 = 0.1;
pub const MAX_SKILL_CARDS: usize = 12;

pub const PROJECT_COLUMNS: usize = 2;
pub const PROJECT_CARD: Vector2 = Vector2 { x: 660.0, y: 300.0 };
pub const PROJECT_STAGGER: f32 = 0.2;
pub const MAX_PROJECT_CARDS: usize = 4;
pub const MAX_TECH_DOTS: usize = 3;

pub const CARD_GAP: f32 = 32.0;
pub const CONTENT_TOP: f32 = 260.0;

/// Rectangle of card `index` in a grid of `total` cards, centered horizontally.
pub fn grid_cell(index: usize, total: usize, columns: usize, card: Vector2, gap: f32, top: f32) -> Rectangle {
    let columns = columns.min(total).max(1);
    let width = columns as f32 * card.x + (columns - 1) as f32 * gap;
    let left = (RENDER_WIDTH as f32 - width) * 0.5;
    let row = index / columns;
    let column = index % columns;
    Rectangle::new(
        left + column as f32 * (card.x + gap),
        top + row as f32 * (card.y + gap),
        card.x,
        card.y,
    )
}

/// Gradient pair for the skill disc at `index`.
pub fn skill_gradient(index: usize) -> (Color, Color) {
    match index % 3 {
        0 => (PRIMARY, Color::new(128, 255, 255, 255)),
        1 => (SECONDARY, ACCENT),
        _ => (ACCENT, PRIMARY),
    }
}

/// Colors of the small technology dots on a project banner.
pub fn tech_dot_color(index: usize) -> Color {
    match index {
        0 => Color::new(248, 113, 113, 255),
        1 => Color::new(74, 222, 128, 255),
        _ => Color::new(96, 165, 250, 255),
    }
}

/// Greedy word wrap at `max_chars` characters per line.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_grid_has_four_columns() {
        let first = grid_cell(0, 8, SKILL_COLUMNS, SKILL_CARD, CARD_GAP, CONTENT_TOP);
        let fourth = grid_cell(3, 8, SKILL_COLUMNS, SKILL_CARD, CARD_GAP, CONTENT_TOP);
        let fifth = grid_cell(4, 8, SKILL_COLUMNS, SKILL_CARD, CARD_GAP, CONTENT_TOP);
        assert_eq!(first.y, fourth.y);
        assert_eq!(fifth.x, first.x);
        assert_eq!(fifth.y, first.y + SKILL_CARD.y + CARD_GAP);

        let right_margin = RENDER_WIDTH as f32 - (fourth.x + fourth.width);
        assert!((right_margin - first.x).abs() < 0.01);
    }

    #[test]
    fn short_lists_stay_centered() {
        let only = grid_cell(0, 1, PROJECT_COLUMNS, PROJECT_CARD, CARD_GAP, CONTENT_TOP);
        let middle = only.x + only.width * 0.5;
        assert!((middle - RENDER_WIDTH as f32 * 0.5).abs() < 0.01);
    }

    #[test]
    fn skill_colors_repeat_every_three() {
        assert_eq!(skill_gradient(0).0, skill_gradient(3).0);
        assert_eq!(skill_gradient(1).0, SECONDARY);
        assert_eq!(skill_gradient(2).0, ACCENT);
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap("Machine learning platform for business intelligence", 24);
        assert_eq!(lines, ["Machine learning", "platform for business", "intelligence"]);
        assert!(wrap("", 10).is_empty());
    }
}
