use async_graphql::*;

use crate::relay::RestBody;

#[derive(SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "AIResult")]
pub struct AiResult {
    pub result: String,
}

impl From<RestBody> for AiResult {
    fn from(body: RestBody) -> Self {
        Self {
            result: body.into_ai_text(),
        }
    }
}
