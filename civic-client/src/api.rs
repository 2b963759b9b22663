//! Typed CRUD over the masters backend

use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::hierarchy::{GeoLevel, GeoNode, SelectOption};
use shared::models::{User, UserType, UserWithType};
use shared::resource::{Resource, ResourceKind};
use shared::response::ListEnvelope;
use std::collections::HashMap;

/// Masters API bound to one transport
#[derive(Debug, Clone)]
pub struct AdminApi<C> {
    http: C,
}

impl<C: HttpClient> AdminApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Fetch every record of `R`
    ///
    /// Only the first page of a paginated answer is kept.
    pub async fn list<R: Resource>(&self) -> ClientResult<Vec<R>> {
        let path = R::KIND.endpoint();
        let envelope: ListEnvelope<R> = self.http.get(path).await?;
        Ok(first_page(path, envelope))
    }

    /// Fetch records of `R` whose `param` column equals `id`
    pub async fn list_filtered<R: Resource>(&self, param: &str, id: i64) -> ClientResult<Vec<R>> {
        let path = R::KIND.filtered_path(param, id);
        let envelope: ListEnvelope<R> = self.http.get(&path).await?;
        Ok(first_page(&path, envelope))
    }

    pub async fn get<R: Resource>(&self, id: i64) -> ClientResult<R> {
        self.http.get(&R::KIND.detail_path(id)).await
    }

    pub async fn create<R: Resource>(&self, payload: &R::Payload) -> ClientResult<R> {
        self.http.post(R::KIND.endpoint(), payload).await
    }

    pub async fn update<R: Resource>(&self, id: i64, payload: &R::Payload) -> ClientResult<R> {
        self.http.put(&R::KIND.detail_path(id), payload).await
    }

    /// Ask the backend to deactivate a record
    pub async fn delete(&self, kind: ResourceKind, id: i64) -> ClientResult<()> {
        self.http.delete(&kind.detail_path(id)).await
    }

    /// Selectable options for one hierarchy level, filtered by the parent
    /// level's id when given
    pub async fn options(
        &self,
        level: GeoLevel,
        parent: Option<i64>,
    ) -> ClientResult<Vec<SelectOption>> {
        self.options_within(level, level.parent().zip(parent)).await
    }

    /// Selectable options for `level`, filtered by any ancestor's id
    /// (`cities/?state=10` when no district is known)
    pub async fn options_within(
        &self,
        level: GeoLevel,
        ancestor: Option<(GeoLevel, i64)>,
    ) -> ClientResult<Vec<SelectOption>> {
        let path = match ancestor {
            Some((ancestor_level, id)) => {
                level.kind().filtered_path(ancestor_level.filter_param(), id)
            }
            None => level.kind().endpoint().to_string(),
        };
        let envelope: ListEnvelope<GeoNode> = self.http.get(&path).await?;
        Ok(first_page(&path, envelope)
            .iter()
            .filter(|node| node.is_selectable())
            .map(SelectOption::from)
            .collect())
    }

    /// Users joined with their type name; both lists are fetched concurrently
    pub async fn users_with_types(&self) -> ClientResult<Vec<UserWithType>> {
        let (users, types) = tokio::join!(self.list::<User>(), self.list::<UserType>());
        let names: HashMap<i64, String> = types?.into_iter().map(|t| (t.id, t.name)).collect();
        Ok(users?
            .into_iter()
            .map(|user| {
                let user_type_name = user
                    .user_type
                    .and_then(|id| names.get(&id).cloned())
                    .unwrap_or_default();
                UserWithType {
                    user,
                    user_type_name,
                }
            })
            .collect())
    }
}

fn first_page<T>(path: &str, envelope: ListEnvelope<T>) -> Vec<T> {
    if envelope.has_more() {
        tracing::warn!(path, "list is paginated, later pages are not fetched");
    }
    envelope.into_vec()
}
