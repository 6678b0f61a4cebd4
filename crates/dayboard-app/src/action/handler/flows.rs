use dayboard_core::RowId;

use crate::{
    action::SettingsAction,
    flow_executor::{FlowExecutor, FlowKey},
    image_import::{self, ImageImportError, ImageSource},
};

/// Reads a picture for `row_id` in the background.
///
/// The result is delivered as [`SettingsAction::ApplyDecodedImage`]; the
/// handler drops it if the row no longer exists.
pub(super) fn spawn_image_import_flow(
    executor: &mut FlowExecutor,
    row_id: RowId,
    source: ImageSource,
) {
    let handle = executor.handle();
    executor.spawn(FlowKey::ImageImport(row_id), async move {
        match image_import::import(source).await {
            Ok(data_uri) => {
                handle.request_action(
                    SettingsAction::ApplyDecodedImage { row_id, data_uri }.into(),
                );
            }
            Err(ImageImportError::Canceled) => {
                log::debug!("image import for row {row_id} canceled");
            }
            Err(err) => log::warn!("image import for row {row_id} failed: {err}"),
        }
    });
}
