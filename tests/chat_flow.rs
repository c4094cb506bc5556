use quipbot::config::Config;
use quipbot::responder::FALLBACK_REPLIES;
use quipbot::{generate, ChatSession, Sender};
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn hi_gets_a_greeting_after_simulated_latency() {
    let mut session = ChatSession::new(&Config::default());
    let start = Instant::now();

    assert!(session.send_message("hi"));
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[1].sender(), Sender::User);

    let reply = session.respond().await.expect("bot reply");
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(1000));
    assert!(elapsed < Duration::from_millis(3000));
    assert_eq!(reply.sender(), Sender::Bot);
    assert!(reply
        .text()
        .to_lowercase()
        .contains("hello! nice to meet you"));
}

#[tokio::test(start_paused = true)]
async fn history_lists_every_message_in_order() {
    let mut session = ChatSession::new(&Config::default());
    assert!(session.send_message("asdf123"));
    session.respond().await.unwrap();

    let history = session.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].sender, Sender::Bot);
    assert_eq!(history[1].text, "asdf123");
    assert!(FALLBACK_REPLIES.contains(&history[2].text.as_str()));

    let json = serde_json::to_value(&history).unwrap();
    assert_eq!(json[1]["sender"], "user");
}

#[tokio::test(start_paused = true)]
async fn clear_after_many_messages_restores_seed() {
    let mut session = ChatSession::new(&Config::default());
    for text in ["one", "two", "three"] {
        assert!(session.send_message(text));
        session.respond().await.unwrap();
    }
    assert_eq!(session.messages().len(), 7);

    assert!(!session.clear_chat(&mut |_: &str| false));
    assert_eq!(session.messages().len(), 7);

    assert!(session.clear_chat(&mut |_: &str| true));
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].id(), 1);
}

#[test]
fn generator_examples() {
    assert!(generate("Hello there").contains("Nice to meet you"));
    assert!(generate("what time is it").starts_with("The current time is"));
    assert!(FALLBACK_REPLIES.contains(&generate("asdf123").as_str()));
}
