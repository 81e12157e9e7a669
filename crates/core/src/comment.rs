//! Comment mapping
//!
//! Maps the Graph API `comment` node and the `/{object-id}/comments` edge.
//!
//! ```json
//! {
//!   "id": "10150146071791729_21193468",
//!   "from": {"id": "1234", "name": "Ryuji Yamashita"},
//!   "message": "Nice!",
//!   "can_remove": true,
//!   "created_time": "2012-08-14T05:41:23+0000",
//!   "like_count": 2,
//!   "user_likes": false
//! }
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::category::Category;
use crate::config::Configuration;
use crate::error::FacebookError;
use crate::json::{
    element_as_object, get_array, get_boolean, get_int, get_iso8601_datetime, get_object,
    get_raw_string, JsonObject,
};
use crate::list::ResponseList;
use crate::response::HttpResponse;
use crate::store::{JsonStore, StoreKey, StoreKeyed};

const KIND: &str = "comment";

/// A comment on a post, photo, or other commentable object
///
/// Two comments are equal when their `id`s are equal, regardless of the other
/// fields.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    can_remove: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    like_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_likes: Option<bool>,
}

impl Comment {
    pub fn from_json(json: &JsonObject) -> Result<Self, FacebookError> {
        let from = get_object("from", json)?
            .map(Category::from_json)
            .transpose()?;

        Ok(Self {
            id: get_raw_string("id", json)?,
            from,
            message: get_raw_string("message", json)?,
            can_remove: get_boolean("can_remove", json)?,
            created_time: get_iso8601_datetime("created_time", json)?,
            like_count: get_int("like_count", json)?,
            user_likes: get_boolean("user_likes", json)?,
        })
    }

    /// Map a single-comment response
    ///
    /// With the JSON store enabled, the store is cleared and then holds the
    /// response body under this comment's identity.
    pub fn from_response<R: HttpResponse + ?Sized>(
        res: &R,
        conf: &Configuration,
        store: &mut JsonStore,
    ) -> Result<Self, FacebookError> {
        let json = res.as_json_object()?;
        let comment = Self::from_json(&json)?;

        if conf.is_json_store_enabled() {
            store.clear();
            store.register(&comment, Value::Object(json));
        }

        Ok(comment)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn from(&self) -> Option<&Category> {
        self.from.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn can_remove(&self) -> Option<bool> {
        self.can_remove
    }

    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_time
    }

    pub fn like_count(&self) -> Option<i64> {
        self.like_count
    }

    pub fn is_user_likes(&self) -> Option<bool> {
        self.user_likes
    }
}

/// Map a `{"data": [...]}` comments envelope into an ordered list
///
/// A malformed element fails the whole list. With the JSON store enabled, the
/// store is cleared and then holds each element's JSON and the `data` array.
pub fn create_comment_list<R: HttpResponse + ?Sized>(
    res: &R,
    conf: &Configuration,
    store: &mut JsonStore,
) -> Result<ResponseList<Comment>, FacebookError> {
    if conf.is_json_store_enabled() {
        store.clear();
    }

    let json = res.as_json_object()?;
    let data = get_array("data", &json)?;

    let comments = data
        .iter()
        .enumerate()
        .map(|(index, element)| Comment::from_json(element_as_object(index, element)?))
        .collect::<Result<Vec<_>, FacebookError>>()?;

    log::debug!("Mapped {} comments", comments.len());

    let comments = ResponseList::from_envelope(&json, comments)?;

    if conf.is_json_store_enabled() {
        for (comment, element) in comments.iter().zip(comments.source()) {
            store.register(comment, element.clone());
        }
        store.register(&comments, Value::Array(comments.source().to_vec()));
    }

    Ok(comments)
}

impl StoreKeyed for Comment {
    fn store_key(&self) -> StoreKey {
        StoreKey::entity(KIND, self.id())
    }
}

impl StoreKeyed for ResponseList<Comment> {
    fn store_key(&self) -> StoreKey {
        StoreKey::list(KIND)
    }
}

impl PartialEq for Comment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Comment {}

impl Hash for Comment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comment [id={}, from={}, message={}, canRemove={}, createdTime={}, likeCount={}, isUserLikes={}]",
            self.id().unwrap_or("null"),
            display_or_null(self.from.as_ref()),
            self.message().unwrap_or("null"),
            display_or_null(self.can_remove.as_ref()),
            display_or_null(self.created_time.as_ref()),
            display_or_null(self.like_count.as_ref()),
            display_or_null(self.user_likes.as_ref()),
        )
    }
}

fn display_or_null<T: fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "null".to_string(), T::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JsonError;
    use crate::response::RawResponse;
    use chrono::TimeZone;
    use serde_json::json;
    use std::collections::HashSet;

    fn parse(value: Value) -> Result<Comment, FacebookError> {
        Comment::from_json(value.as_object().unwrap())
    }

    fn full_comment_json() -> Value {
        json!({
            "id": "10150146071791729_21193468",
            "from": {"id": "1234", "name": "Ryuji Yamashita"},
            "message": "Nice!",
            "can_remove": true,
            "created_time": "2012-08-14T05:41:23+0000",
            "like_count": 2,
            "user_likes": false
        })
    }

    #[test]
    fn test_from_json_full() {
        let comment = parse(full_comment_json()).unwrap();

        assert_eq!(comment.id(), Some("10150146071791729_21193468"));
        assert_eq!(comment.from().unwrap().name(), Some("Ryuji Yamashita"));
        assert_eq!(comment.message(), Some("Nice!"));
        assert_eq!(comment.can_remove(), Some(true));
        assert_eq!(
            comment.created_time(),
            Some(Utc.with_ymd_and_hms(2012, 8, 14, 5, 41, 23).unwrap())
        );
        assert_eq!(comment.like_count(), Some(2));
        assert_eq!(comment.is_user_likes(), Some(false));
    }

    #[test]
    fn test_from_json_minimal() {
        let comment = parse(json!({"id": "123", "message": "hi"})).unwrap();

        assert_eq!(comment.id(), Some("123"));
        assert_eq!(comment.message(), Some("hi"));
        assert!(comment.from().is_none());
        assert_eq!(comment.can_remove(), None);
        assert_eq!(comment.created_time(), None);
        assert_eq!(comment.like_count(), None);
        assert_eq!(comment.is_user_likes(), None);
    }

    #[test]
    fn test_null_from_is_none() {
        let comment = parse(json!({"id": "1", "from": null})).unwrap();
        assert!(comment.from().is_none());
    }

    #[test]
    fn test_malformed_from_fails() {
        let err = parse(json!({"id": "1", "from": "someone"})).unwrap_err();
        assert!(matches!(err.cause(), JsonError::TypeMismatch { key, .. } if key == "from"));

        let err = parse(json!({"id": "1", "from": {"id": ["1234"]}})).unwrap_err();
        assert!(matches!(err.cause(), JsonError::TypeMismatch { key, .. } if key == "id"));
    }

    #[test]
    fn test_malformed_scalar_fails() {
        assert!(parse(json!({"id": "1", "like_count": "many"})).is_err());
        assert!(parse(json!({"id": "1", "created_time": "last week"})).is_err());
    }

    #[test]
    fn test_equality_is_id_based() {
        let a = parse(json!({"id": "1", "message": "first"})).unwrap();
        let b = parse(json!({"id": "1", "message": "edited"})).unwrap();
        let c = parse(json!({"id": "2", "message": "first"})).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Comment> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_response_without_store() {
        let res = RawResponse::ok(full_comment_json().to_string());
        let mut store = JsonStore::new();

        let comment = Comment::from_response(&res, &Configuration::new(), &mut store).unwrap();

        assert_eq!(comment.message(), Some("Nice!"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_response_with_store() {
        let res = RawResponse::ok(full_comment_json().to_string());
        let conf = Configuration::new().with_json_store(true);
        let mut store = JsonStore::new();
        store.register(&parse(json!({"id": "stale"})).unwrap(), json!({"id": "stale"}));

        let comment = Comment::from_response(&res, &conf, &mut store).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.raw_json(&comment), Some(&full_comment_json()));
    }

    #[test]
    fn test_from_response_invalid_body() {
        let res = RawResponse::ok("not json");
        let err = Comment::from_response(&res, &Configuration::new(), &mut JsonStore::new())
            .unwrap_err();

        assert!(matches!(err.cause(), JsonError::Syntax(_)));
    }

    #[test]
    fn test_create_comment_list_in_order() {
        let res = RawResponse::ok(r#"{"data":[{"id":"1"},{"id":"2"}]}"#);
        let list =
            create_comment_list(&res, &Configuration::new(), &mut JsonStore::new()).unwrap();

        let ids: Vec<_> = list.iter().map(|c| c.id().unwrap()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(list.source().len(), 2);
    }

    #[test]
    fn test_create_comment_list_one_bad_element_fails_all() {
        let res = RawResponse::ok(r#"{"data":[{"id":"1"},{"id":"2","like_count":[]}]}"#);
        let conf = Configuration::new().with_json_store(true);
        let mut store = JsonStore::new();

        assert!(create_comment_list(&res, &conf, &mut store).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_comment_list_non_object_element_fails() {
        let res = RawResponse::ok(r#"{"data":[{"id":"1"}, "2"]}"#);
        let err = create_comment_list(&res, &Configuration::new(), &mut JsonStore::new())
            .unwrap_err();

        assert!(matches!(err.cause(), JsonError::TypeMismatch { key, .. } if key == "1"));
    }

    #[test]
    fn test_create_comment_list_missing_data_fails() {
        let res = RawResponse::ok(r#"{"paging":{}}"#);
        let err = create_comment_list(&res, &Configuration::new(), &mut JsonStore::new())
            .unwrap_err();

        assert!(matches!(err.cause(), JsonError::MissingKey(key) if key == "data"));
    }

    #[test]
    fn test_from_response_error_envelope_fails() {
        let res = RawResponse::new(
            400,
            r#"{"error":{"message":"Unsupported get request.","type":"GraphMethodException","code":100}}"#,
        );
        let conf = Configuration::new().with_json_store(true);
        let mut store = JsonStore::new();

        let err = Comment::from_response(&res, &conf, &mut store).unwrap_err();

        assert!(matches!(err.cause(), JsonError::ErrorResponse { status: 400, .. }));
        assert_eq!(err.message(), "Graph API returned an error (HTTP 400): Unsupported get request.");
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_comment_list_registers_raw_json() {
        let body = json!({
            "data": [
                {"id": "1", "message": "a"},
                {"id": "2", "message": "b"}
            ],
            "paging": {"cursors": {"before": "MQ==", "after": "Mg=="}}
        });
        let res = RawResponse::ok(body.to_string());
        let conf = Configuration::new().with_json_store(true);
        let mut store = JsonStore::new();

        let list = create_comment_list(&res, &conf, &mut store).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.raw_json(&list[1]), Some(&json!({"id": "2", "message": "b"})));
        assert_eq!(store.raw_json(&list), Some(&body["data"]));
        assert_eq!(
            list.paging().unwrap().cursors.as_ref().unwrap().after.as_deref(),
            Some("Mg==")
        );
    }

    #[test]
    fn test_create_comment_list_clears_previous_request() {
        let conf = Configuration::new().with_json_store(true);
        let mut store = JsonStore::new();

        let first = RawResponse::ok(r#"{"data":[{"id":"1"},{"id":"2"}]}"#);
        create_comment_list(&first, &conf, &mut store).unwrap();
        assert_eq!(store.len(), 3);

        let second = RawResponse::ok(r#"{"data":[{"id":"3"}]}"#);
        let list = create_comment_list(&second, &conf, &mut store).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.raw_json(&list[0]).is_some());
    }

    #[test]
    fn test_display() {
        let comment = parse(json!({"id": "1", "message": "hi", "like_count": 3})).unwrap();
        assert_eq!(
            comment.to_string(),
            "Comment [id=1, from=null, message=hi, canRemove=null, createdTime=null, likeCount=3, isUserLikes=null]"
        );
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let comment = parse(json!({"id": "1", "from": {"id": "9"}, "like_count": "4"})).unwrap();

        assert_eq!(
            serde_json::to_value(&comment).unwrap(),
            json!({"id": "1", "from": {"id": "9"}, "like_count": 4})
        );
    }
}
