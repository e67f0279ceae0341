// color_table.rs — Per-category styles built from $LSCOLORS
//
// LSCOLORS is a string of (foreground, background) letter pairs, one pair per
// category in the fixed order below.  Only the first seven pairs are used.

use tracing::debug;

use crate::color::{resolve_color, ColorRole, NO_COLOR};
use crate::ehm::AppError;
use crate::environment_provider::EnvironmentProvider;

/// Name of the environment variable holding the color configuration
pub const LSCOLORS_ENV_VAR_NAME: &str = "LSCOLORS";

/// Shortest LSCOLORS value accepted
pub const LSCOLORS_MIN_LEN: usize = 12;





/// Entry categories that can carry a color, in LSCOLORS pair order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Directory,
    SymLink,
    Socket,
    Pipe,
    Executable,
    BlockDevice,
    CharDevice,
}

pub const CATEGORY_COUNT: usize = 7;

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Directory,
        Category::SymLink,
        Category::Socket,
        Category::Pipe,
        Category::Executable,
        Category::BlockDevice,
        Category::CharDevice,
    ];
}





/// Escape sequence prefix for each category.
///
/// A disabled table resolves every category to the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    enabled: bool,
    styles:  [String; CATEGORY_COUNT],
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ColorTable
//
//  Construction from the environment or a literal LSCOLORS value, and
//  per-category lookup.
//
////////////////////////////////////////////////////////////////////////////////

impl ColorTable {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  disabled
    //
    //  Table used when LSCOLORS is not set: no category is styled.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn disabled() -> Self {
        ColorTable {
            enabled: false,
            styles:  Default::default(),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_environment
    //
    //  Build the table from $LSCOLORS.  Absent means colors are off; a
    //  present but malformed value is an error.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_environment(provider: &dyn EnvironmentProvider) -> Result<Self, AppError> {
        match provider.get_env_var(LSCOLORS_ENV_VAR_NAME) {
            Some(value) => Self::parse(&value),
            None => {
                debug!("{} not set, colors disabled", LSCOLORS_ENV_VAR_NAME);
                Ok(Self::disabled())
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  parse
    //
    //  Parse an LSCOLORS value.  Pairs are read in category order; a pair
    //  that lies past the end of the value counts as "xx".  Length and
    //  positions are in bytes, so a non-ASCII byte is just an unknown code.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn parse(value: &str) -> Result<Self, AppError> {
        let codes = value.as_bytes();

        if codes.len() < LSCOLORS_MIN_LEN {
            return Err(AppError::ConfigFormat {
                expected: LSCOLORS_MIN_LEN,
                found:    codes.len(),
            });
        }

        let mut styles: [String; CATEGORY_COUNT] = Default::default();

        for (idx, style) in styles.iter_mut().enumerate() {
            let fg = codes.get(idx * 2).map_or(NO_COLOR, |&b| char::from(b));
            let bg = codes.get(idx * 2 + 1).map_or(NO_COLOR, |&b| char::from(b));

            style.push_str(resolve_color(fg, ColorRole::Foreground));
            style.push_str(resolve_color(bg, ColorRole::Background));
        }

        debug!(value, "parsed {}", LSCOLORS_ENV_VAR_NAME);

        Ok(ColorTable { enabled: true, styles })
    }





    pub fn is_enabled(&self) -> bool {
        self.enabled
    }





    /// Escape sequence for `category`; empty if the table is disabled or
    /// the category's pair was "xx".
    pub fn style(&self, category: Category) -> &str {
        &self.styles[category as usize]
    }
}
