//! Fixed sizes for the previewer's own chrome.
//!
//! The preview canvas is sized from the active token table instead; these
//! constants only cover the rail, toolbar and tables around it.

// ── Spacing (4px base grid) ──────────────────────────────────────

pub const SPACE_XXS: f32 = 2.0;
pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 12.0;
pub const SPACE_LG: f32 = 16.0;

// ── Typography ───────────────────────────────────────────────────

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_XL: f32 = 22.0;

pub const LINE_HEIGHT_TIGHT: f32 = 1.2;
pub const LINE_HEIGHT_NORMAL: f32 = 1.45;

// ── Layout ───────────────────────────────────────────────────────

pub const NAV_RAIL_WIDTH: f32 = 80.0;
pub const NAV_ICON_SIZE: f32 = 22.0;
pub const NAV_LABEL_SIZE: f32 = 12.0;
pub const STATUS_BAR_HEIGHT: f32 = 40.0;
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const TOKEN_NAME_WIDTH: f32 = 180.0;
pub const TOKEN_CELL_WIDTH: f32 = 72.0;
pub const BADGE_PADDING: [f32; 2] = [SPACE_XXS, SPACE_SM];
pub const INPUT_PADDING: [f32; 2] = [SPACE_XS, SPACE_SM];

// ── Border radii ─────────────────────────────────────────────────

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_XL: f32 = 16.0;
pub const RADIUS_FULL: f32 = 9999.0;
