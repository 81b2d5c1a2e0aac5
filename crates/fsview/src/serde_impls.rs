// A view serializes as its logical content: a string when that content is
// UTF-8, raw bytes otherwise.

use bstr::ByteSlice;
use serde::{Serialize, Serializer};

use crate::View;

impl Serialize for View<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let content = self.to_bstring();
        match content.to_str() {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.serialize_bytes(&content),
        }
    }
}
