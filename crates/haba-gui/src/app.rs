use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length, Point, Size, Subscription, Task, Theme};

use haba_core::tokens::available_token_tables;
use haba_core::{AppConfig, DeviceTier, Responsive, ThemeMode, TokenTable, Viewport};

use crate::keyboard::Shortcut;
use crate::screen::{preview, tokens, Page};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme, HabaTheme};
use crate::window_state::WindowState;

/// Startup options resolved from the command line.
#[derive(Debug, Clone)]
pub struct Launch {
    pub config: AppConfig,
    /// Where settings changes are written back.
    pub config_path: PathBuf,
    /// Token table to open with, overriding the config.
    pub tokens: Option<String>,
    /// Where window geometry is kept. `None` disables persistence.
    pub window_state_path: Option<PathBuf>,
}

/// Application state. Owns the layout and hands it to the pages.
pub struct Haba {
    page: Page,
    config: AppConfig,
    config_path: PathBuf,
    // Token tables
    tables: Vec<Arc<TokenTable>>,
    table_names: Vec<String>,
    selected_table: String,
    // Live layout for the content area
    responsive: Responsive,
    // Screens
    tokens: tokens::Tokens,
    // Theme
    current_theme: HabaTheme,
    active_mode: ThemeMode,
    // Chrome
    status_message: String,
    window_state: WindowState,
    window_state_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Page),
    WindowResized(Size),
    WindowMoved(Point),
    TokensSelected(String),
    ModeSelected(ThemeMode),
    CopyTokens,
    ReloadTables,
    SampleTapped(&'static str),
    Shortcut(Shortcut),
    Tokens(tokens::Message),
}

/// The part of the window pages draw into, treated as the device viewport.
pub fn viewport_for(window: Size) -> Viewport {
    Viewport::new(
        window.width - style::NAV_RAIL_WIDTH,
        window.height - style::STATUS_BAR_HEIGHT,
    )
}

impl Haba {
    pub fn new(launch: Launch) -> (Self, Task<Message>) {
        let Launch {
            config,
            config_path,
            tokens: tokens_override,
            window_state_path,
        } = launch;

        let tables: Vec<Arc<TokenTable>> =
            available_token_tables().into_iter().map(Arc::new).collect();
        let wanted = tokens_override.unwrap_or_else(|| config.appearance.tokens.clone());
        let table = pick_table(&tables, &wanted);
        if table.name() != wanted {
            tracing::warn!("Token table `{wanted}` not found, using `{}`", table.name());
        }

        let window_state = window_state_path
            .as_deref()
            .map(WindowState::load_from)
            .unwrap_or_default();
        let viewport = viewport_for(window_state.size());
        // Config was validated before the window opened.
        let responsive = Responsive::new(config.responsive.clone(), Arc::clone(&table), viewport)
            .unwrap_or_else(|e| {
                tracing::error!("Invalid responsive config, using defaults: {e}");
                Responsive::new(Default::default(), Arc::clone(&table), viewport)
                    .expect("default responsive config is valid")
            });

        let current_theme = HabaTheme::default_theme();
        let active_mode = theme::resolve_mode(config.appearance.mode);

        let app = Self {
            page: Page::default(),
            table_names: tables.iter().map(|t| t.name().to_string()).collect(),
            selected_table: table.name().to_string(),
            tables,
            config,
            config_path,
            responsive,
            tokens: tokens::Tokens::new(),
            current_theme,
            active_mode,
            status_message: "Ready".into(),
            window_state,
            window_state_path,
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("Haba - {}", self.responsive.context().tier())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.page = page;
            }
            Message::WindowResized(size) => {
                self.window_state.width = size.width;
                self.window_state.height = size.height;
                self.save_window_state();
                if let Some(change) = self.responsive.update(viewport_for(size)) {
                    self.status_message = format!("Tier changed: {} → {}", change.from, change.to);
                }
            }
            Message::WindowMoved(pos) => {
                self.window_state.x = pos.x;
                self.window_state.y = pos.y;
                self.save_window_state();
            }
            Message::TokensSelected(name) => {
                if let Some(table) = self.tables.iter().find(|t| t.name() == name) {
                    self.responsive.set_table(Arc::clone(table));
                    self.selected_table = name.clone();
                    self.config.appearance.tokens = name;
                    self.persist_config();
                }
            }
            Message::ModeSelected(mode) => {
                self.config.appearance.mode = mode;
                self.active_mode = theme::resolve_mode(mode);
                self.persist_config();
            }
            Message::CopyTokens => self.copy_tokens(),
            Message::ReloadTables => self.reload_tables(),
            Message::SampleTapped(name) => {
                self.status_message = format!("Tapped \"Book\" on {name}");
            }
            Message::Shortcut(shortcut) => match shortcut {
                Shortcut::CopyTokens => self.copy_tokens(),
                Shortcut::Reload => self.reload_tables(),
                Shortcut::Open(page) => self.page = page,
            },
            Message::Tokens(msg) => self.tokens.update(msg),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = self.current_theme.colors(self.active_mode);
        let ctx = self.responsive.context();

        let page: Element<'_, Message> = match self.page {
            Page::Preview => preview::view(ctx, &self.responsive.config().breakpoints, cs),
            Page::Tokens => self.tokens.view(ctx, cs).map(Message::Tokens),
        };

        let content = column![
            container(page).width(Length::Fill).height(Length::Fill),
            self.status_bar(cs),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        row![self.nav_rail(cs, ctx.tier()), content]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscriptions()
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.active_mode)
    }

    fn copy_tokens(&mut self) {
        let ctx = self.responsive.context();
        let json = ctx.tokens().to_json();
        let result = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(json));
        self.status_message = match result {
            Ok(()) => format!("Copied {} tokens for {}", ctx.table().name(), ctx.tier()),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                "Clipboard unavailable".into()
            }
        };
    }

    fn reload_tables(&mut self) {
        self.tables = available_token_tables().into_iter().map(Arc::new).collect();
        self.table_names = self.tables.iter().map(|t| t.name().to_string()).collect();
        let table = pick_table(&self.tables, &self.selected_table);
        self.selected_table = table.name().to_string();
        self.responsive.set_table(table);
        self.status_message = format!("Loaded {} token tables", self.tables.len());
    }

    fn save_window_state(&self) {
        if let Some(path) = &self.window_state_path {
            self.window_state.save_to(path);
        }
    }

    fn persist_config(&mut self) {
        if let Err(e) = self.config.save_to(&self.config_path) {
            tracing::warn!("Failed to save config: {e}");
            self.status_message = format!("Could not save settings: {e}");
        }
    }

    fn status_bar<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let tokens_pick = pick_list(
            self.table_names.as_slice(),
            Some(&self.selected_table),
            Message::TokensSelected,
        )
        .text_size(style::TEXT_SM)
        .padding(style::INPUT_PADDING)
        .style(theme::pick_list_style(cs))
        .menu_style(theme::pick_list_menu_style(cs));

        let mode_pick = pick_list(
            ThemeMode::ALL,
            Some(self.config.appearance.mode),
            Message::ModeSelected,
        )
        .text_size(style::TEXT_SM)
        .padding(style::INPUT_PADDING)
        .style(theme::pick_list_style(cs))
        .menu_style(theme::pick_list_menu_style(cs));

        let bar = row![
            text(&self.status_message)
                .size(style::TEXT_XS)
                .width(Length::Fill),
            tokens_pick,
            mode_pick,
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

        container(bar)
            .style(theme::status_bar(cs))
            .padding([0.0, style::SPACE_MD])
            .center_y(Length::Fixed(style::STATUS_BAR_HEIGHT))
            .width(Length::Fill)
            .into()
    }

    fn nav_rail<'a>(&'a self, cs: &'a ColorScheme, tier: DeviceTier) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'a>, label: &'a str, page: Page| {
            let active = self.page == page;
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE),
                    text(label).size(style::NAV_LABEL_SIZE),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(Message::NavigateTo(page))
            .style(theme::nav_rail_item(active, cs))
        };

        let action = |icon: iced::widget::Text<'a>, label: &'a str, msg: Message| {
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE),
                    text(label).size(style::NAV_LABEL_SIZE),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(msg)
            .style(theme::ghost_button(cs))
        };

        use lucide_icons::iced as icons;

        let device_icon = if tier == DeviceTier::Tablet {
            icons::icon_tablet()
        } else {
            icons::icon_smartphone()
        };

        let rail = column![
            column![
                nav_item(device_icon, "Preview", Page::Preview),
                nav_item(icons::icon_ruler(), "Tokens", Page::Tokens),
            ]
            .spacing(style::SPACE_XS)
            .align_x(Alignment::Center),
            iced::widget::Space::new().height(Length::Fill),
            column![
                action(icons::icon_copy(), "Copy", Message::CopyTokens),
                action(icons::icon_refresh_cw(), "Reload", Message::ReloadTables),
            ]
            .spacing(style::SPACE_XS)
            .align_x(Alignment::Center),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

        container(rail)
            .style(theme::nav_rail_bg(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding([style::SPACE_LG, 0.0])
            .into()
    }
}

/// The table called `name`, else the first (embedded default) table.
fn pick_table(tables: &[Arc<TokenTable>], name: &str) -> Arc<TokenTable> {
    tables
        .iter()
        .find(|t| t.name() == name)
        .or_else(|| tables.first())
        .map(Arc::clone)
        .unwrap_or_else(|| Arc::new(TokenTable::default_table()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_excludes_chrome() {
        let vp = viewport_for(Size::new(375.0 + style::NAV_RAIL_WIDTH, 852.0));
        assert_eq!(vp.width, 375.0);
        assert_eq!(vp.height, 852.0 - style::STATUS_BAR_HEIGHT);
    }

    #[test]
    fn test_tiny_window_is_degenerate_not_negative() {
        let vp = viewport_for(Size::new(40.0, 20.0));
        assert!(vp.is_degenerate());
        assert_eq!(vp.height, 0.0);
    }

    fn launch_in(dir: &std::path::Path) -> Launch {
        Launch {
            config: AppConfig::default(),
            config_path: dir.join("config.toml"),
            tokens: None,
            window_state_path: Some(dir.join("window.json")),
        }
    }

    #[test]
    fn test_resize_across_tablet_breakpoint_changes_tier() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = Haba::new(launch_in(dir.path()));
        assert_eq!(app.responsive.context().tier(), DeviceTier::Medium);

        let chrome_w = style::NAV_RAIL_WIDTH;
        let chrome_h = style::STATUS_BAR_HEIGHT;
        let _ = app.update(Message::WindowResized(Size::new(
            800.0 + chrome_w,
            1024.0 + chrome_h,
        )));
        assert_eq!(app.responsive.context().tier(), DeviceTier::Tablet);
        assert_eq!(app.status_message, "Tier changed: medium → tablet");
        assert_eq!(app.title(), "Haba - tablet");

        let saved = WindowState::load_from(&dir.path().join("window.json"));
        assert_eq!(saved.width, 800.0 + chrome_w);

        // Just below the breakpoint drops back a tier.
        let _ = app.update(Message::WindowResized(Size::new(
            767.0 + chrome_w,
            1024.0 + chrome_h,
        )));
        assert_eq!(app.responsive.context().tier(), DeviceTier::XLarge);
    }

    #[test]
    fn test_resize_within_tier_keeps_status() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = Haba::new(launch_in(dir.path()));
        let _ = app.update(Message::WindowResized(Size::new(
            380.0 + style::NAV_RAIL_WIDTH,
            812.0,
        )));
        assert_eq!(app.responsive.context().tier(), DeviceTier::Medium);
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn test_pick_table_falls_back_to_first() {
        let tables = vec![
            Arc::new(TokenTable::default_table()),
            Arc::new(TokenTable::from_toml(haba_core::tokens::COMPACT_TOKENS_TOML).unwrap()),
        ];
        assert_eq!(pick_table(&tables, "compact").name(), "compact");
        assert_eq!(pick_table(&tables, "missing").name(), "default");
        assert_eq!(pick_table(&[], "missing").name(), "default");
    }
}
