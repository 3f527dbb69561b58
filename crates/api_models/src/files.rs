//! File objects returned by the payments API.
use common_enums::{FilePurpose, ForeignInto};
use error_stack::{report, ResultExt};
use sdk_env::{instrument, logger};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::{
    errors::{CustomResult, ParsingError},
    ext_traits::ResponseFieldsExt,
};

/// A file uploaded to the payments API.
#[derive(Clone, Debug, PartialEq)]
pub struct File {
    id: String,
    created: OffsetDateTime,
    purpose: FilePurpose,
    size: u64,
    file_type: String,
    all_response_fields: Map<String, Value>,
}

impl File {
    /// Decodes a file out of an API response object.
    ///
    /// `id`, `created`, `size`, `purpose` and `type` are all required. An
    /// unknown `purpose` decodes to [`FilePurpose::Other`].
    #[instrument(skip_all)]
    pub fn decode_from_api_response(response: &Value) -> CustomResult<Self, ParsingError> {
        Self::try_decode(response).inspect_err(|error| {
            logger::warn!(?error, "failed to decode file object");
        })
    }

    fn try_decode(response: &Value) -> CustomResult<Self, ParsingError> {
        let fields = response
            .as_object()
            .ok_or_else(|| report!(ParsingError::InvalidResponseShape))?;

        let created = fields.get_required_integer::<i64>("created")?;
        let created = OffsetDateTime::from_unix_timestamp(created)
            .change_context(ParsingError::InvalidFieldValue {
                field_name: "created",
            })
            .attach_printable_lazy(|| format!("timestamp {created} is out of range"))?;

        Ok(Self {
            id: fields.get_required_string("id")?.to_owned(),
            created,
            purpose: Some(fields.get_required_string("purpose")?).foreign_into(),
            size: fields.get_required_integer("size")?,
            file_type: fields.get_required_string("type")?.to_owned(),
            all_response_fields: fields.clone(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created(&self) -> OffsetDateTime {
        self.created
    }

    pub fn purpose(&self) -> FilePurpose {
        self.purpose
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Format of the file, e.g. `png` or `pdf`.
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// The response object this file was decoded from, unmodified.
    pub fn all_response_fields(&self) -> &Map<String, Value> {
        &self.all_response_fields
    }
}
