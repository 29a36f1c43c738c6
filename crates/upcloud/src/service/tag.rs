use super::Service;
use crate::error::Result;
use crate::model::Tag;
use crate::request::{CreateTag, DeleteTag, GetTags, ModifyTag};

impl Service {
    pub async fn get_tags(&self) -> Result<Vec<Tag>> {
        self.fetch_all(&GetTags).await
    }

    pub async fn create_tag(&self, request: &CreateTag) -> Result<Tag> {
        self.fetch(request).await
    }

    pub async fn modify_tag(&self, request: &ModifyTag) -> Result<Tag> {
        self.fetch(request).await
    }

    pub async fn delete_tag(&self, request: &DeleteTag) -> Result<()> {
        self.send(request).await
    }
}
