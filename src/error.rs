//! Panel error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabPanelError {
    #[error("Tab index out of bounds: {index} (tab count {count})")]
    IndexOutOfBounds { index: usize, count: usize },
}
