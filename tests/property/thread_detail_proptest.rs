//! Thread-detail assembly over random forums on the in-memory store

use proptest::prelude::*;
use serde_json::json;

use forum_api::backend::auth::users::{NewUser, UserRepository};
use forum_api::backend::forum::entities::{DELETED_COMMENT_PLACEHOLDER, DELETED_REPLY_PLACEHOLDER};
use forum_api::backend::MemoryStore;
use forum_api::shared::forum::{ContentPayload, ThreadPayload};

/// Per comment: (reply count, deleted, liked by user 0, liked by user 1, deleted reply index)
type CommentShape = (usize, bool, bool, bool, Option<usize>);

fn content(text: String) -> ContentPayload {
    serde_json::from_value(json!({ "content": text })).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_thread_detail_matches_writes(
        shapes in prop::collection::vec(
            (0usize..4, any::<bool>(), any::<bool>(), any::<bool>(), prop::option::of(0usize..4)),
            0..5,
        )
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async move {
            let store = MemoryStore::new();
            let mut users = Vec::new();
            for name in ["alice", "bob"] {
                users.push(store.add_user(NewUser::new(name, "hash", name)).await.unwrap().id);
            }
            let forum = store.forum_service();
            let thread_payload: ThreadPayload =
                serde_json::from_value(json!({ "title": "t", "body": "b" })).unwrap();
            let thread = forum.add_thread(&users[0], &thread_payload).await.unwrap();

            let shapes: Vec<CommentShape> = shapes;
            for (i, (replies, deleted, like0, like1, deleted_reply)) in shapes.iter().enumerate() {
                let comment = forum
                    .add_comment(&users[i % 2], &thread.id, &content(format!("c{}", i)))
                    .await
                    .unwrap();
                let mut reply_ids = Vec::new();
                for j in 0..*replies {
                    let reply = forum
                        .add_reply(&users[0], &thread.id, &comment.id, &content(format!("r{}-{}", i, j)))
                        .await
                        .unwrap();
                    reply_ids.push(reply.id);
                }
                if let Some(index) = deleted_reply {
                    if let Some(reply_id) = reply_ids.get(*index) {
                        forum.delete_reply(&users[0], &thread.id, &comment.id, reply_id).await.unwrap();
                    }
                }
                if *like0 {
                    forum.toggle_like(&users[0], &thread.id, &comment.id).await.unwrap();
                }
                if *like1 {
                    forum.toggle_like(&users[1], &thread.id, &comment.id).await.unwrap();
                }
                if *deleted {
                    forum.delete_comment(&users[i % 2], &thread.id, &comment.id).await.unwrap();
                }
            }

            let detail = forum.get_thread_detail(&thread.id).await.unwrap();
            assert_eq!(detail.comments.len(), shapes.len());

            for (i, (comment, (replies, deleted, like0, like1, deleted_reply))) in
                detail.comments.iter().zip(shapes.iter()).enumerate()
            {
                let expected_content = if *deleted {
                    DELETED_COMMENT_PLACEHOLDER.to_string()
                } else {
                    format!("c{}", i)
                };
                assert_eq!(comment.content, expected_content);
                assert_eq!(comment.like_count, (*like0 as i64) + (*like1 as i64));
                assert_eq!(comment.replies.len(), *replies);

                for (j, reply) in comment.replies.iter().enumerate() {
                    let expected = if *deleted_reply == Some(j) {
                        DELETED_REPLY_PLACEHOLDER.to_string()
                    } else {
                        format!("r{}-{}", i, j)
                    };
                    assert_eq!(reply.content, expected);
                }
            }
        });
    }
}
