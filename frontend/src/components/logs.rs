//! Server activity via Server-Sent Events.
//!
//! Connects to the backend's `/api/logs` endpoint and shows searches and
//! warnings as they happen.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

use crate::{LogEntry, BACKEND_URL, MAX_LOG_ENTRIES};

/// Append `entry`, dropping the oldest lines beyond `cap`.
///
/// Kept entries retain their `seq`, which is the list key.
pub fn push_capped(logs: &mut Vec<LogEntry>, entry: LogEntry, cap: usize) {
    logs.push(entry);
    if logs.len() > cap {
        let excess = logs.len() - cap;
        logs.drain(..excess);
    }
}

/// Start the SSE connection. Call once at app startup.
pub fn init_sse_logs(set_logs: WriteSignal<Vec<LogEntry>>) {
    let sse_url = format!("{}/api/logs", BACKEND_URL);

    let event_source = match EventSource::new(&sse_url) {
        Ok(es) => es,
        Err(e) => {
            log::error!("Failed to create EventSource: {:?}", e);
            return;
        }
    };

    let mut next_seq: u64 = 0;
    let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
        let Some(data) = event.data().as_string() else {
            return;
        };
        match serde_json::from_str::<LogEntry>(&data) {
            Ok(mut entry) => {
                entry.seq = next_seq;
                next_seq += 1;
                set_logs.update(|logs| push_capped(logs, entry, MAX_LOG_ENTRIES));
            }
            Err(e) => log::warn!("Unreadable log event: {}", e),
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    event_source.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        log::warn!("SSE connection error - will auto-reconnect");
    }) as Box<dyn FnMut(web_sys::Event)>);

    event_source.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    // Lives for the whole session
    std::mem::forget(event_source);

    log::info!("📡 SSE log stream initialized");
}

/// Collapsible server activity panel
#[component]
pub fn LogsPanel(
    logs: ReadSignal<Vec<LogEntry>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <div class="logs-panel" class:open=move || open.get()>
            <div class="logs-header">
                <button class="logs-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                    {move || format!("📋 Server activity ({})", logs.get().len())}
                </button>
                <button class="logs-clear" on:click=move |_| set_logs.set(vec![])>
                    "Clear"
                </button>
            </div>
            <Show when=move || open.get()>
                <div class="logs-content">
                    <For
                        each=move || logs.get()
                        key=|entry| entry.seq
                        children=move |entry| {
                            let indent = "   ".repeat(entry.indent as usize);
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.time().to_string()} "] "</span>
                                    {indent}
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;

    fn entry(seq: u64) -> LogEntry {
        LogEntry {
            level: LogLevel::Info,
            message: format!("line {}", seq),
            indent: 0,
            timestamp: "2025-03-01T09:15:42Z".into(),
            seq,
        }
    }

    #[test]
    fn test_overflow_keeps_keys_of_surviving_lines() {
        let mut logs = Vec::new();
        for seq in 0..5 {
            push_capped(&mut logs, entry(seq), 3);
        }

        let keys: Vec<u64> = logs.iter().map(|e| e.seq).collect();
        assert_eq!(keys, [2, 3, 4]);
        assert_eq!(logs[0].message, "line 2");
    }
}
