use iced::widget::{column, container, row, text};
use iced::{Alignment, Element};

use haba_core::{Breakpoints, DeviceTier};

use crate::style;
use crate::theme::{self, ColorScheme};

/// One pill per tier with its width range; the active tier is filled.
pub fn tier_strip<'a, Message: 'a>(
    cs: &ColorScheme,
    breakpoints: &Breakpoints,
    active: DeviceTier,
) -> Element<'a, Message> {
    let pills = DeviceTier::ALL.into_iter().map(|tier| -> Element<'a, Message> {
        let is_active = tier == active;
        let label = column![
            text(tier.as_str()).size(style::TEXT_SM),
            text(range_label(breakpoints, tier)).size(style::TEXT_XS),
        ]
        .align_x(Alignment::Center);

        container(label)
            .padding(style::BADGE_PADDING)
            .style(theme::tier_badge(is_active, cs))
            .into()
    });

    row(pills)
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center)
        .into()
}

/// `<360`, `360–414`, `768+`.
pub fn range_label(breakpoints: &Breakpoints, tier: DeviceTier) -> String {
    match (tier, breakpoints.range(tier)) {
        (DeviceTier::Small, (_, Some(upper))) => format!("<{upper}"),
        (_, (lower, Some(upper))) => format!("{lower}–{upper}"),
        (_, (lower, None)) => format!("{lower}+"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_labels() {
        let bp = Breakpoints::default();
        assert_eq!(range_label(&bp, DeviceTier::Small), "<360");
        assert_eq!(range_label(&bp, DeviceTier::Large), "414–600");
        assert_eq!(range_label(&bp, DeviceTier::Tablet), "768+");
    }
}
