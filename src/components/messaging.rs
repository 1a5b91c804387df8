//! Messaging Page
//!
//! Conversation list with name search on the left, chat pane on the
//! right. Sending only clears the draft; nothing leaves the page. The
//! message history is a single fixture thread regardless of which
//! conversation is active.

use leptos::prelude::*;

use super::initials;
use crate::chat;
use crate::filter;
use crate::fixtures;

#[component]
pub fn MessagingPage() -> impl IntoView {
    let conversations = fixtures::conversations();
    let messages = fixtures::messages();

    let first_id = conversations.first().map(|c| c.id).unwrap_or_default();
    let (active_id, set_active_id) = signal(first_id);
    let (draft, set_draft) = signal(String::new());
    let (search, set_search) = signal(String::new());

    let visible = {
        let conversations = conversations.clone();
        Memo::new(move |_| filter::visible_conversations(&conversations, &search.get()))
    };
    let active = {
        let conversations = conversations.clone();
        move || conversations.iter().find(|c| c.id == active_id.get()).cloned()
    };

    let send = move || {
        if chat::should_send(&draft.get()) {
            set_draft.set(String::new());
        }
    };
    // Plain Enter sends without inserting a newline; Shift+Enter falls through
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="page messaging">
            <header class="page-header">
                <div>
                    <h1>"Messaging"</h1>
                    <p class="muted">"Chat with your clients and groups"</p>
                </div>
            </header>

            <div class="messaging-grid">
                <div class="card conversation-list">
                    <div class="list-search">
                        <input
                            type="text"
                            class="search"
                            placeholder="Search conversations..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>
                    <For
                        each=move || visible.get()
                        key=|conv| conv.id
                        children=move |conv| {
                            let id = conv.id;
                            let row_class = move || {
                                if active_id.get() == id {
                                    "conversation-row active"
                                } else {
                                    "conversation-row"
                                }
                            };
                            view! {
                                <div class=row_class on:click=move |_| set_active_id.set(id)>
                                    <span class="avatar">
                                        {initials(&conv.name)}
                                        {conv
                                            .online
                                            .then(|| view! { <span class="online-dot"></span> })}
                                    </span>
                                    <div class="conversation-body">
                                        <div class="row">
                                            <p class="truncate">{conv.name.clone()}</p>
                                            {(conv.unread > 0)
                                                .then(|| {
                                                    view! { <span class="badge">{conv.unread}</span> }
                                                })}
                                        </div>
                                        <p class="muted truncate">{conv.last_message.clone()}</p>
                                        <p class="muted small">{conv.timestamp.clone()}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                    {move || {
                        visible
                            .get()
                            .is_empty()
                            .then(|| {
                                view! { <p class="muted empty-state">"No conversations found"</p> }
                            })
                    }}
                </div>

                <div class="card chat-pane">
                    <header class="chat-header">
                        {move || {
                            active()
                                .map(|conv| {
                                    view! {
                                        <span class="avatar">{initials(&conv.name)}</span>
                                        <div>
                                            <p>{conv.name.clone()}</p>
                                            {conv
                                                .online
                                                .then(|| {
                                                    view! { <p class="online small">"Online"</p> }
                                                })}
                                            {conv
                                                .is_group
                                                .then(|| {
                                                    view! { <p class="muted small">"12 members"</p> }
                                                })}
                                        </div>
                                    }
                                })
                        }} <button class="outline small">"AI Assist"</button>
                    </header>

                    <div class="message-scroll">
                        {messages
                            .iter()
                            .map(|msg| {
                                let bubble_class = if msg.is_me {
                                    "message mine"
                                } else {
                                    "message theirs"
                                };
                                view! {
                                    <div class=bubble_class>
                                        {(!msg.is_me)
                                            .then(|| {
                                                view! {
                                                    <p class="sender small">{msg.sender.clone()}</p>
                                                }
                                            })} <p>{msg.body.clone()}</p>
                                        <p class="muted small">{msg.timestamp.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="composer">
                        <button class="outline icon">"\u{1f4ce}"</button>
                        <input
                            type="text"
                            placeholder="Type a message..."
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button class="primary" on:click=move |_| send()>
                            "Send"
                        </button>
                    </div>
                    <div class="quick-replies">
                        <button class="ghost small">"Quick Reply 1"</button>
                        <button class="ghost small">"Quick Reply 2"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
