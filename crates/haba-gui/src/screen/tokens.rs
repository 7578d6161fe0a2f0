//! Every token across every tier, with the active tier column highlighted.

use iced::widget::{column, container, row, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use haba_core::{DeviceTier, LayoutContext, TokenTable};

use crate::screen::format_px;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, empty_state};

#[derive(Debug, Clone)]
pub enum Message {
    FilterChanged(String),
}

#[derive(Debug, Default)]
pub struct Tokens {
    filter: String,
}

impl Tokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::FilterChanged(filter) => self.filter = filter,
        }
    }

    /// Rows whose name contains the filter, case-insensitively.
    pub fn visible_rows<'t>(
        &self,
        table: &'t TokenTable,
    ) -> Vec<(&'t str, [f32; DeviceTier::COUNT])> {
        let needle = self.filter.trim().to_lowercase();
        table
            .rows()
            .into_iter()
            .filter(|(name, _)| needle.is_empty() || name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn view<'a>(
        &'a self,
        ctx: &'a LayoutContext,
        cs: &'a ColorScheme,
    ) -> Element<'a, Message> {
        let header = text(format!("Tokens: {}", ctx.table().name()))
            .size(style::TEXT_XL)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_TIGHT);

        let filter = text_input("Filter tokens...", &self.filter)
            .on_input(Message::FilterChanged)
            .size(style::TEXT_SM)
            .padding(style::INPUT_PADDING)
            .width(Length::Fixed(style::SIDEBAR_WIDTH));

        let top = row![header, iced::widget::Space::new().width(Length::Fill), filter]
            .align_y(Alignment::Center)
            .spacing(style::SPACE_MD);

        let rows = self.visible_rows(ctx.table());
        let body: Element<'a, Message> = if rows.is_empty() {
            empty_state(
                cs,
                lucide_icons::iced::icon_search_x()
                    .size(style::TEXT_XL * 2.0)
                    .color(cs.outline)
                    .into(),
                "No matching tokens",
                "Try a shorter filter such as \"font\" or \"spacing\".",
            )
        } else {
            let mut table = Column::new()
                .spacing(style::SPACE_XXS)
                .push(header_row(ctx.tier(), cs));
            for (i, (name, values)) in rows.into_iter().enumerate() {
                table = table.push(token_row(i, name, values, ctx.tier(), cs));
            }
            widgets::styled_scrollable(table, cs)
                .height(Length::Fill)
                .into()
        };

        column![top, body]
            .spacing(style::SPACE_LG)
            .padding(style::SPACE_LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn header_row<'a>(active: DeviceTier, cs: &ColorScheme) -> Element<'a, Message> {
    let mut cells = Row::new().push(
        text("token")
            .size(style::TEXT_XS)
            .color(cs.outline)
            .width(Length::Fixed(style::TOKEN_NAME_WIDTH)),
    );
    for tier in DeviceTier::ALL {
        let color = if tier == active {
            cs.tier
        } else {
            cs.outline
        };
        cells = cells.push(
            text(tier.as_str())
                .size(style::TEXT_XS)
                .color(color)
                .width(Length::Fixed(style::TOKEN_CELL_WIDTH)),
        );
    }
    container(cells.align_y(Alignment::Center))
        .padding([style::SPACE_XS, style::SPACE_SM])
        .into()
}

fn token_row<'a>(
    index: usize,
    name: &str,
    values: [f32; DeviceTier::COUNT],
    active: DeviceTier,
    cs: &ColorScheme,
) -> Element<'a, Message> {
    let mut cells = Row::new().push(
        text(name.to_string())
            .size(style::TEXT_SM)
            .color(cs.on_surface)
            .width(Length::Fixed(style::TOKEN_NAME_WIDTH)),
    );
    for (tier, value) in DeviceTier::ALL.into_iter().zip(values) {
        let color = if tier == active {
            cs.tier
        } else {
            cs.on_surface_variant
        };
        cells = cells.push(
            text(format_px(value))
                .size(style::TEXT_SM)
                .color(color)
                .width(Length::Fixed(style::TOKEN_CELL_WIDTH)),
        );
    }
    container(cells.align_y(Alignment::Center))
        .padding([style::SPACE_XS, style::SPACE_SM])
        .width(Length::Fill)
        .style(theme::table_row(index % 2 == 1, cs))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_insensitive() {
        let table = TokenTable::default_table();
        let mut screen = Tokens::new();
        let all = screen.visible_rows(&table).len();
        assert!(all > 0);

        screen.update(Message::FilterChanged("  FONT_size ".into()));
        let fonts = screen.visible_rows(&table);
        assert!(!fonts.is_empty());
        assert!(fonts.len() < all);
        assert!(fonts.iter().all(|(name, _)| name.starts_with("font_size.")));

        screen.update(Message::FilterChanged("zzz".into()));
        assert!(screen.visible_rows(&table).is_empty());
    }
}
