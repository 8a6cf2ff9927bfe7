use contracts::enums::upload_module::UploadModule;
use contracts::usecases::u501_bulk_upload::request::{BulkUploadQuery, FILE_FIELD};
use contracts::usecases::u501_bulk_upload::response::UploadResult;
use web_sys::FormData;

use crate::shared::api_error::{post_form, ApiError};
use crate::shared::api_utils::api_url;

/// Path and query of the bulk-upload endpoint for `module`
pub fn bulk_upload_path(module: UploadModule) -> Result<String, ApiError> {
    let query = serde_qs::to_string(&BulkUploadQuery { module })
        .map_err(|e| ApiError::Request(e.to_string()))?;
    Ok(format!("/contribuinte/bulk-upload?{}", query))
}

/// Post `file` as multipart field `file` to the given module
pub async fn bulk_upload(file: &web_sys::File, module: UploadModule) -> Result<UploadResult, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;

    let url = api_url(&bulk_upload_path(module)?);
    post_form(&url, form).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_upload_path() {
        assert_eq!(
            bulk_upload_path(UploadModule::A).unwrap(),
            "/contribuinte/bulk-upload?module=A"
        );
        assert_eq!(
            bulk_upload_path(UploadModule::B).unwrap(),
            "/contribuinte/bulk-upload?module=B"
        );
    }
}
