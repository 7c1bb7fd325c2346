//! Attack playground panel: SSRF and reflected-XSS demonstration forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! This panel exists to exercise the backend's intentionally vulnerable
//! endpoints. The proxy response is rendered as escaped text; the preview
//! response is injected as raw HTML on purpose — that unsafe sink *is* the
//! reflected-XSS demonstration. Keep it that way.

use leptos::prelude::*;

use crate::net::types::EchoedResponse;

#[component]
pub fn VulnPage() -> impl IntoView {
    let ssrf_url = RwSignal::new(String::new());
    let ssrf_msg = RwSignal::new(String::new());
    let ssrf_result = RwSignal::new(None::<EchoedResponse>);

    let xss_text = RwSignal::new(String::new());
    let xss_msg = RwSignal::new(String::new());
    let xss_result = RwSignal::new(None::<EchoedResponse>);

    let on_ssrf = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let url = ssrf_url.get().trim().to_owned();
        if url.is_empty() {
            return;
        }
        ssrf_result.set(None);
        ssrf_msg.set("Fetching...".to_owned());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::proxy_fetch(&url).await {
                    Ok(resp) => {
                        ssrf_msg.set(String::new());
                        ssrf_result.set(Some(resp));
                    }
                    Err(err) => ssrf_msg.set(format!("Error: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    };

    let on_xss = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = xss_text.get();
        if text.trim().is_empty() {
            return;
        }
        xss_result.set(None);
        xss_msg.set("Loading preview...".to_owned());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::preview(&text).await {
                    Ok(resp) => {
                        xss_msg.set(String::new());
                        xss_result.set(Some(resp));
                    }
                    Err(err) => xss_msg.set(format!("Error: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    view! {
        <h1>"Attack Playground (Demo)"</h1>
        <div class="vuln-layout">
            <div class="panel">
                <h2>"SSRF via /proxy"</h2>
                <p>"Fetch any URL (including internal services) via the vulnerable proxy."</p>
                <form on:submit=on_ssrf>
                    <label>
                        "Target URL"
                        <input
                            type="text"
                            placeholder="https://httpbin.org/get"
                            prop:value=move || ssrf_url.get()
                            on:input=move |ev| ssrf_url.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit">"Fetch via /proxy"</button>
                    <div class="msg">{move || ssrf_msg.get()}</div>
                </form>
                {move || {
                    ssrf_result
                        .get()
                        .map(|resp| {
                            // Escaped text node: the proxy body is displayed, not executed.
                            view! {
                                <div class="proxy-result">
                                    <strong>{format!("Status {}", resp.status)}</strong>
                                    <pre>{resp.body}</pre>
                                </div>
                            }
                        })
                }}
            </div>
            <div class="panel">
                <h2>"Reflected XSS via /preview"</h2>
                <p>"Echoes user input without escaping (XSS)."</p>
                <form on:submit=on_xss>
                    <label>
                        "Text to preview"
                        <input
                            type="text"
                            placeholder="<script>alert(1)</script>"
                            prop:value=move || xss_text.get()
                            on:input=move |ev| xss_text.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit">"Preview via /preview"</button>
                    <div class="msg">{move || xss_msg.get()}</div>
                </form>
                {move || {
                    xss_result
                        .get()
                        .map(|resp| {
                            view! {
                                <div class="preview-result">
                                    <strong>{format!("Status {}", resp.status)}</strong>
                                    // Raw HTML sink, intentionally unsanitized.
                                    <div inner_html=resp.body></div>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
