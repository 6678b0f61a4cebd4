use serde::{Deserialize, Serialize};

use crate::{Payload, Task, TaskId};

// Stored record layout. Field names and the `type` tag follow the format
// already present in users' browser storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TaskDto {
    pub(crate) id: TaskId,
    #[serde(default)]
    pub(crate) time: String,
    #[serde(default)]
    pub(crate) icon: String,
    #[serde(rename = "type", default)]
    pub(crate) kind: KindDto,
    #[serde(default)]
    pub(crate) text: String,
    #[serde(rename = "imageSrc", default)]
    pub(crate) image_src: String,
    #[serde(default)]
    pub(crate) done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum KindDto {
    #[default]
    Text,
    Image,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        let (kind, text, image_src) = match &task.payload {
            Payload::Text { text } => (KindDto::Text, text.clone(), String::new()),
            Payload::Image { image_src, caption } => {
                (KindDto::Image, caption.clone(), image_src.clone())
            }
        };
        Self {
            id: task.id,
            time: task.time.clone(),
            icon: task.icon.clone(),
            kind,
            text,
            image_src,
            done: task.done,
        }
    }
}

impl From<TaskDto> for Task {
    fn from(dto: TaskDto) -> Self {
        let TaskDto {
            id,
            time,
            icon,
            kind,
            text,
            image_src,
            done,
        } = dto;
        let payload = match kind {
            KindDto::Text => Payload::Text { text },
            KindDto::Image => Payload::Image {
                image_src,
                caption: text,
            },
        };
        Self {
            id,
            time,
            icon,
            payload,
            done,
        }
    }
}
