use async_graphql::{InputObject, Object, ID};
use derive_new::new;

#[derive(Clone, Debug, PartialEq, new)]
pub struct Message {
    pub(crate) id: ID,
    pub(crate) content: Option<String>,
    pub(crate) author: Option<String>,
}

#[Object]
/// A message left by an author
impl Message {
    /// The ID of the message
    async fn id(&self) -> ID {
        self.id.clone()
    }

    /// The text of the message
    async fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Who wrote the message
    async fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

/// Fields supplied when creating or replacing a message
#[derive(InputObject, Clone, Debug, Default, new)]
pub struct MessageInput {
    pub(crate) content: Option<String>,
    pub(crate) author: Option<String>,
}
