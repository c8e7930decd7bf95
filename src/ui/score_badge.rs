// SPDX-License-Identifier: MPL-2.0
//! Score badge: a pill showing how strong a document scored.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, Text};
use iced::{Color, Element};

/// Bands a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Strong,
    GoodStart,
    NeedsWork,
}

impl ScoreTone {
    /// Above 70 is strong, above 49 a good start, anything else needs work.
    /// Fractional scores are compared as-is; NaN needs work.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            ScoreTone::Strong
        } else if score > 49.0 {
            ScoreTone::GoodStart
        } else {
            ScoreTone::NeedsWork
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            ScoreTone::Strong => "score-strong",
            ScoreTone::GoodStart => "score-good-start",
            ScoreTone::NeedsWork => "score-needs-work",
        }
    }

    /// (background, text) colors.
    fn colors(self) -> (Color, Color) {
        match self {
            ScoreTone::Strong => (palette::SUCCESS_100, palette::SUCCESS_500),
            ScoreTone::GoodStart => (palette::WARNING_100, palette::WARNING_500),
            ScoreTone::NeedsWork => (palette::ERROR_100, palette::ERROR_500),
        }
    }
}

pub fn view<'a, Message: 'a>(score: f64, i18n: &I18n) -> Element<'a, Message> {
    let tone = ScoreTone::from_score(score);
    let (background, text) = tone.colors();

    container(Text::new(i18n.tr(tone.i18n_key())).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(background, text))
        .into()
}
