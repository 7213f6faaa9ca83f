//! Presenting finished figures.
//!
//! Plot calls only record lines on a [`Figure`]; a presenter is what makes
//! them visible. [`TerminalPresenter`] takes over the terminal until the
//! user quits, [`TextPresenter`] prints a single frame as plain text.

mod terminal;
mod text;

use crate::error::Result;
use crate::figure::Figure;

pub use terminal::TerminalPresenter;
pub use text::{render_to_string, TextPresenter};

/// Shows everything plotted on a figure.
pub trait Presenter {
    /// Display the figure. May block until the viewer is closed.
    fn present(&mut self, figure: &Figure) -> Result<()>;
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        (**self).present(figure)
    }
}
