//! Sample marketplace layout sized entirely from the layout context.
//!
//! Reads tokens for the current tier; never owns or mutates them.

use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use haba_core::{Breakpoints, ByTier, DeviceTier, LayoutContext};

use crate::app::Message;
use crate::screen::format_px;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, form_row, tier_strip};

/// Placeholder listings rendered in the sample grid.
const SAMPLES: &[(&str, &str, &str)] = &[
    ("Amara Okafor", "Ceramics", "Hand-thrown tableware, glazed to order."),
    ("Luis Ferreira", "Carpentry", "Custom shelving and small repairs."),
    ("Mei Tanaka", "Tailoring", "Alterations and made-to-measure shirts."),
    ("Jonas Berg", "Plumbing", "Leaks, fittings and bathroom refits."),
    ("Priya Nair", "Jewellery", "Silver rings and pendant commissions."),
    ("Sam Whitfield", "Electrics", "Lighting, sockets and safety checks."),
];

/// Grid columns per tier: one on phones, more as width allows.
fn columns() -> ByTier<usize> {
    ByTier::new(1)
        .at(DeviceTier::Large, 2)
        .at(DeviceTier::Tablet, 3)
}

pub fn view<'a>(
    ctx: &'a LayoutContext,
    breakpoints: &Breakpoints,
    cs: &'a ColorScheme,
) -> Element<'a, Message> {
    let metrics = metrics_card(ctx, breakpoints, cs);
    let canvas = sample_canvas(ctx, cs);

    let page = column![metrics, canvas]
        .spacing(style::SPACE_LG)
        .padding(style::SPACE_LG)
        .width(Length::Fill);

    widgets::styled_scrollable(page, cs)
        .height(Length::Fill)
        .into()
}

fn metrics_card<'a>(
    ctx: &'a LayoutContext,
    breakpoints: &Breakpoints,
    cs: &'a ColorScheme,
) -> Element<'a, Message> {
    let vp = ctx.viewport();
    let scaler = ctx.scaler();
    let value = |s: String| -> Element<'a, Message> {
        text(s).size(style::TEXT_SM).color(cs.on_surface).into()
    };

    let rows = column![
        form_row(
            cs,
            "Viewport",
            value(format!("{} × {}", format_px(vp.width), format_px(vp.height)))
        ),
        form_row(cs, "Orientation", value(format!("{:?}", vp.orientation()))),
        form_row(cs, "Scale factor", value(format!("{:.3}", scaler.factor()))),
        form_row(
            cs,
            "scale(16)",
            value(format!(
                "{} (floor {})",
                format_px(scaler.scale(16.0)),
                format_px(16.0 * scaler.floor_ratio())
            ))
        ),
        form_row(cs, "Token table", value(ctx.table().name().to_string())),
    ]
    .spacing(style::SPACE_XS);

    let content = column![tier_strip(cs, breakpoints, ctx.tier()), rows].spacing(style::SPACE_MD);

    container(content)
        .padding(style::SPACE_LG)
        .width(Length::Fill)
        .style(theme::card(cs))
        .into()
}

fn sample_canvas<'a>(ctx: &'a LayoutContext, cs: &'a ColorScheme) -> Element<'a, Message> {
    let padding = ctx.token_or("padding", 16.0);
    let gap = ctx.token_or("spacing.md", 12.0);

    let heading = text("Find an artisan")
        .size(ctx.token_or("font_size.heading", 24.0))
        .color(cs.on_surface)
        .line_height(style::LINE_HEIGHT_TIGHT);
    let caption = text("Top rated near you")
        .size(ctx.token_or("font_size.caption", 12.0))
        .color(cs.on_surface_variant);

    let per_row = (*columns().resolve(ctx.tier())).max(1);
    let mut grid = Column::new().spacing(gap);
    for chunk in SAMPLES.chunks(per_row) {
        let mut line = Row::new().spacing(gap);
        for sample in chunk {
            line = line.push(sample_card(ctx, cs, sample));
        }
        // Keep card widths equal on the last, shorter row.
        for _ in chunk.len()..per_row {
            line = line.push(iced::widget::Space::new().width(Length::Fill));
        }
        grid = grid.push(line);
    }

    let title_block = column![heading, caption].spacing(ctx.token_or("spacing.xs", 4.0));
    let content = column![title_block, grid].spacing(ctx.token_or("spacing.lg", 16.0));

    container(content)
        .padding(padding)
        .width(Length::Fill)
        .style(theme::device_frame(cs))
        .into()
}

fn sample_card<'a>(
    ctx: &'a LayoutContext,
    cs: &'a ColorScheme,
    &(name, craft, blurb): &'static (&'static str, &'static str, &'static str),
) -> Element<'a, Message> {
    let avatar_size = ctx.token_or("avatar", 44.0);
    let button_height = ctx.token_or("button_height", 44.0);
    let body = ctx.token_or("font_size.body", 15.0);
    let initials: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();

    let avatar = container(text(initials).size(body).color(cs.on_primary_container))
        .center_x(Length::Fixed(avatar_size))
        .center_y(Length::Fixed(avatar_size))
        .style(theme::placeholder(cs, avatar_size / 2.0));

    let header = row![
        avatar,
        column![
            text(name)
                .size(ctx.token_or("font_size.title", 20.0))
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text(craft)
                .size(ctx.token_or("font_size.caption", 12.0))
                .color(cs.on_surface_variant),
        ]
        .spacing(ctx.token_or("spacing.xs", 4.0)),
    ]
    .spacing(ctx.token_or("spacing.sm", 8.0))
    .align_y(Alignment::Center);

    let book = button(
        container(text("Book").size(body))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::SampleTapped(name))
    .padding(0)
    .width(Length::Fill)
    .height(Length::Fixed(button_height))
    .style(theme::primary_button(cs));

    let content = column![
        header,
        text(blurb)
            .size(body)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL),
        book,
    ]
    .spacing(ctx.token_or("spacing.md", 12.0));

    container(content)
        .padding(ctx.token_or("padding", 16.0))
        .width(Length::Fill)
        .style(theme::sample_card(cs, ctx.token_or("radius.card", 12.0)))
        .into()
}
