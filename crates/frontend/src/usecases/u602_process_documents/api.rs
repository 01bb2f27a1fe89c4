use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::shared::api_utils::FetchClient;
use crate::shared::request_cycle::{HttpReply, TransportError};

/// Posts files to the document-processing endpoint as one multipart body
#[allow(async_fn_in_trait)]
pub trait DocumentApi {
    type File;

    /// Every file goes under `field`, in the given order
    async fn process(&self, field: &str, files: &[Self::File]) -> Result<HttpReply, TransportError>;
}

impl DocumentApi for FetchClient {
    type File = web_sys::File;

    async fn process(&self, field: &str, files: &[web_sys::File]) -> Result<HttpReply, TransportError> {
        let form = FormData::new().map_err(js_request_error)?;
        for file in files {
            form.append_with_blob_and_filename(field, file, &file.name())
                .map_err(js_request_error)?;
        }
        self.post_form(&self.config().process_documents_endpoint, form)
            .await
    }
}

fn js_request_error(e: JsValue) -> TransportError {
    TransportError::Request(format!("{e:?}"))
}
