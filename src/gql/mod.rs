mod message;
pub(crate) use message::*;

use crate::db::Storage;
use async_graphql::{Context, EmptySubscription, Object, Result, Schema, ID};

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema around `storage`; resolvers reach it through the context.
pub fn build_schema(storage: Storage) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(storage)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single message by ID
    async fn get_message(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Message>> {
        let db = ctx.data::<Storage>()?.lock().await;
        Ok(Some(db.get(&id)?))
    }

    /// All messages, oldest first
    async fn get_messages(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Message>>>> {
        let db = ctx.data::<Storage>()?.lock().await;
        Ok(Some(db.list().into_iter().map(Some).collect()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Store a new message under a generated ID
    async fn create_message(
        &self,
        ctx: &Context<'_>,
        input: Option<MessageInput>,
    ) -> Result<Option<Message>> {
        let mut db = ctx.data::<Storage>()?.lock().await;
        Ok(Some(db.create(input.unwrap_or_default())))
    }

    /// Replace the content and author of an existing message
    async fn update_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<MessageInput>,
    ) -> Result<Option<Message>> {
        let mut db = ctx.data::<Storage>()?.lock().await;
        Ok(Some(db.update(&id, input.unwrap_or_default())?))
    }
}
