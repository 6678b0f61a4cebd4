//! Projection of tasks into board rows.
//!
//! The projection is pure so that the main board can be tested without a
//! rendering surface; the UI only paints what [`project_row`] returns.

use crate::{Payload, Task, TaskId};

/// Colors of the position numbers, picked by `index % 8`.
pub const NUMBER_PALETTE: [[u8; 3]; 8] = [
    [0xf8, 0x71, 0x71],
    [0xfb, 0x92, 0x3c],
    [0xfb, 0xbf, 0x24],
    [0xa3, 0xe6, 0x35],
    [0x34, 0xd3, 0x99],
    [0x22, 0xd3, 0xee],
    [0x81, 0x8c, 0xf8],
    [0xc0, 0x84, 0xfc],
];

const IMAGE_ALT_FALLBACK: &str = "Task Image";

/// What the payload cell of a row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowPayload {
    /// Inline text field holding the current text.
    EditableText(String),
    /// Static picture.
    Image {
        /// `data:` URI of the picture.
        src: String,
        /// Alternative text.
        alt: String,
    },
}

/// Everything needed to paint one row of the main board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    /// Task the row shows.
    pub id: TaskId,
    /// 1-based position.
    pub number: usize,
    /// RGB color of the number outline.
    pub number_color: [u8; 3],
    /// Free-text time label.
    pub time: String,
    /// Icon glyph.
    pub icon: String,
    /// Editable text or picture.
    pub payload: RowPayload,
    /// Checkbox state.
    pub done: bool,
}

/// Projects the task at `index` into a board row.
///
/// Image tasks without a chosen picture fall back to the editable text field.
#[must_use]
pub fn project_row(task: &Task, index: usize) -> BoardRow {
    let payload = match &task.payload {
        Payload::Image { image_src, caption } if !image_src.is_empty() => RowPayload::Image {
            src: image_src.clone(),
            alt: if caption.is_empty() {
                IMAGE_ALT_FALLBACK.to_owned()
            } else {
                caption.clone()
            },
        },
        payload => RowPayload::EditableText(payload.text().to_owned()),
    };
    BoardRow {
        id: task.id,
        number: index + 1,
        number_color: NUMBER_PALETTE[index % NUMBER_PALETTE.len()],
        time: task.time.clone(),
        icon: task.icon.clone(),
        payload,
        done: task.done,
    }
}
