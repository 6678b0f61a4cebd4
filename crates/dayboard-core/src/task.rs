//! Checklist entries.

/// Stable identifier of a [`Task`].
///
/// Identifiers are minted once (see [`TaskIdGenerator`]) and never reassigned
/// while the task exists.
///
/// [`TaskIdGenerator`]: crate::TaskIdGenerator
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Which payload variant a task displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum PayloadKind {
    /// Free text, editable from the main board.
    #[default]
    Text,
    /// An uploaded picture.
    Image,
}

impl PayloadKind {
    /// All kinds, in selector order.
    pub const ALL: [Self; 2] = [Self::Text, Self::Image];

    /// Label shown in the kind selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
        }
    }
}

/// Content of a task.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Payload {
    /// Free text.
    Text {
        /// The text itself.
        text: String,
    },
    /// A data-URI encoded picture with an optional caption.
    Image {
        /// `data:` URI holding the encoded picture. May be empty when the
        /// image has not been chosen yet.
        image_src: String,
        /// Caption, used as alternative text.
        caption: String,
    },
}

impl Payload {
    /// Creates an empty text payload.
    #[must_use]
    pub fn empty_text() -> Self {
        Self::Text {
            text: String::new(),
        }
    }

    /// Returns the variant tag.
    #[must_use]
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Text { .. } => PayloadKind::Text,
            Self::Image { .. } => PayloadKind::Image,
        }
    }

    /// Returns the text, or the caption for images.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Image { caption, .. } => caption,
        }
    }

    /// Returns the image source for image payloads.
    #[must_use]
    pub fn image_src(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => None,
            Self::Image { image_src, .. } => Some(image_src),
        }
    }
}

/// One schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier.
    pub id: TaskId,
    /// Free-text time label such as `7:30~8:15`. Never parsed.
    pub time: String,
    /// A single glyph, usually from [`ICON_PALETTE`](crate::icon::ICON_PALETTE).
    pub icon: String,
    /// Text or image content.
    pub payload: Payload,
    /// Completion flag.
    pub done: bool,
}

impl Task {
    /// Creates a not-yet-done text task.
    #[must_use]
    pub fn text(id: TaskId, time: &str, icon: &str, text: &str) -> Self {
        Self {
            id,
            time: time.to_owned(),
            icon: icon.to_owned(),
            payload: Payload::Text {
                text: text.to_owned(),
            },
            done: false,
        }
    }

    /// Sets the text of a text payload, or the caption of an image payload.
    pub fn set_text(&mut self, new_text: String) {
        match &mut self.payload {
            Payload::Text { text } => *text = new_text,
            Payload::Image { caption, .. } => *caption = new_text,
        }
    }
}
