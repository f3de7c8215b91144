use dioxus::core::use_drop;
use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::components::common::{CheckList, Panel, ProgressBar};
use crate::components::AppContent;
use crate::model::pest::{schedule_analysis, AnalysisSlot, ImagePreview, PestDetection, Phase};

const CAMERA_INPUT_ID: &str = "pest-camera-input";
const GALLERY_INPUT_ID: &str = "pest-gallery-input";

/// Script clearing both hidden file inputs, so picking the same file again
/// still fires `onchange`.
fn reset_inputs_script() -> String {
    [CAMERA_INPUT_ID, GALLERY_INPUT_ID]
        .iter()
        .map(|id| format!("document.getElementById('{id}').value = '';"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn reset_file_inputs() {
    let mut eval = document::eval(&reset_inputs_script());
    spawn(async move {
        let _ = eval.recv::<serde_json::Value>().await;
    });
}

#[component]
pub fn PestComponent() -> Element {
    let content = use_context::<AppContent>();
    let mut detection = use_signal(PestDetection::default);
    let slot = use_hook(AnalysisSlot::default);

    {
        let slot = slot.clone();
        use_drop(move || {
            if slot.cancel() {
                debug!("pest screen closed with analysis in flight");
            }
        });
    }

    let on_image = {
        let slot = slot.clone();
        move |evt: Event<FormData>| {
            let slot = slot.clone();
            let files: Vec<_> = evt.files().into_iter().collect();
            spawn(async move {
                let Some(file) = files.into_iter().next() else {
                    return;
                };
                let name = file.name();
                let mime_type = file.content_type().unwrap_or_default();
                let bytes = match file.read_bytes().await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!(file = %name, error = ?e, "could not read picked file");
                        return;
                    }
                };
                match ImagePreview::from_bytes(&name, &mime_type, &bytes) {
                    Ok(preview) => {
                        slot.cancel();
                        detection.write().select_image(preview);
                        info!(file = %name, size = bytes.len(), "image selected");
                    }
                    Err(e) => warn!(file = %name, error = %e, "image rejected"),
                }
                reset_file_inputs();
            });
        }
    };

    let on_remove = {
        let slot = slot.clone();
        move |_: MouseEvent| {
            slot.cancel();
            detection.write().remove_image();
            reset_file_inputs();
        }
    };

    let on_cancel = {
        let slot = slot.clone();
        move |_: MouseEvent| {
            if slot.cancel() {
                info!("analysis cancelled");
            }
            detection.write().abandon();
        }
    };

    let on_analyze = {
        let slot = slot.clone();
        let content = content.clone();
        move |_: MouseEvent| {
            let Some(ticket) = detection.write().begin_analysis() else {
                return;
            };
            let (task, handle) = schedule_analysis(
                content.settings.analysis_delay(),
                content.pest.results.clone(),
            );
            slot.hold(ticket, handle);
            info!(?ticket, "analysis started");

            let slot = slot.clone();
            spawn(async move {
                match task.await {
                    Ok(results) => {
                        slot.finish(ticket);
                        let count = results.len();
                        if detection.write().complete(ticket, results) {
                            info!(?ticket, count, "analysis complete");
                        } else {
                            debug!(?ticket, "stale analysis result dropped");
                        }
                    }
                    Err(_) => debug!(?ticket, "analysis aborted"),
                }
            });
        }
    };

    let state = detection.read().clone();

    rsx! {
        div { class: "screen animate-fade-in",
            Panel { title: "Upload Crop Image", icon: "📷",
                input {
                    id: CAMERA_INPUT_ID,
                    class: "hidden",
                    r#type: "file",
                    accept: "image/*",
                    "capture": "environment",
                    onchange: on_image.clone(),
                }
                input {
                    id: GALLERY_INPUT_ID,
                    class: "hidden",
                    r#type: "file",
                    accept: "image/*",
                    onchange: on_image,
                }

                {match state.image() {
                    None => rsx! {
                        div { class: "upload-area",
                            div { class: "text-4xl", "📷" }
                            p { class: "font-medium", "Take a photo or upload an image" }
                            p { class: "text-sm text-muted",
                                "Capture clear images of affected leaves or plants for best results"
                            }
                            div { class: "flex gap-2 mt-4",
                                label { r#for: CAMERA_INPUT_ID, class: "btn btn-primary flex-1", "📷 Camera" }
                                label { r#for: GALLERY_INPUT_ID, class: "btn btn-outline flex-1", "⬆ Gallery" }
                            }
                        }
                    },
                    Some(image) => rsx! {
                        div { class: "preview",
                            img { class: "preview-image", src: "{image.data_url}", alt: "{image.name}" }
                            button {
                                class: "icon-btn preview-remove",
                                "aria-label": "Remove image",
                                onclick: on_remove,
                                "✕"
                            }
                        }
                        if state.is_analyzing() {
                            div { class: "analyzing",
                                div { class: "spinner" }
                                p { class: "font-medium", "Analyzing image..." }
                                button { class: "btn btn-outline", onclick: on_cancel, "Cancel" }
                            }
                        } else {
                            button {
                                class: "btn btn-primary w-full mt-4",
                                onclick: on_analyze,
                                "🔍 Analyze for Pests & Diseases"
                            }
                        }
                    },
                }}
            }

            if state.phase() == Phase::Complete {
                Panel { title: "Detection Results", icon: "🔬",
                    if state.results().is_empty() {
                        p { class: "text-muted", "No pests or diseases detected." }
                    }
                    div { class: "space-y-4",
                        for (i, result) in state.results().iter().enumerate() {
                            div { key: "{i}", class: "result-card",
                                div { class: "flex items-center justify-between",
                                    h3 { class: "font-semibold text-lg", "{result.pest}" }
                                    span { class: "{result.severity.badge_class()}", "{result.severity:?}" }
                                }
                                div { class: "flex justify-between text-sm mt-2",
                                    span { "Confidence" }
                                    span { class: "font-medium", "{result.confidence}%" }
                                }
                                ProgressBar { percent: result.confidence }
                                p { class: "text-sm mt-2",
                                    "{result.urgency.icon()} Action needed: "
                                    span { class: "font-medium", "{result.urgency.label()}" }
                                }
                                div { class: "advice-block advice-green",
                                    h4 { "💊 Treatment" }
                                    p { "{result.treatment}" }
                                }
                                div { class: "advice-block",
                                    h4 { "🛡 Prevention" }
                                    CheckList { items: result.prevention.clone() }
                                }
                            }
                        }
                    }
                }
            }

            Panel { title: "Photography Tips", icon: "💡",
                CheckList { items: content.pest.tips.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_script_clears_both_inputs() {
        let script = reset_inputs_script();
        assert!(script.contains("document.getElementById('pest-camera-input').value = '';"));
        assert!(script.contains("document.getElementById('pest-gallery-input').value = '';"));
    }
}
