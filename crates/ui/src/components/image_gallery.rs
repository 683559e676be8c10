//! Image gallery
//!
//! Shows a product's stored images with a delete button on each, and the
//! names of files attached in this session that are not stored yet.

use catalog_form::{GalleryItem, delete_image};
use catalog_model::AttachedFile;
use dioxus::prelude::*;

use crate::state::{APP_STATE, StatusLevel, use_services};

/// Properties for ImageGallery component
#[derive(Props, Clone, PartialEq)]
pub struct ImageGalleryProps {
    /// Stored images
    pub items: Vec<GalleryItem>,

    /// Files picked in this session
    #[props(default)]
    pub pending: Vec<AttachedFile>,

    /// Called after a delete so the page can reload the product
    #[props(default)]
    pub on_deleted: EventHandler<()>,
}

/// Stored and pending product images
#[component]
pub fn ImageGallery(props: ImageGalleryProps) -> Element {
    let services = use_services();
    let mut deleting = use_signal(|| None::<String>);

    if props.items.is_empty() && props.pending.is_empty() {
        return rsx! {
            p { class: "text-sm text-slate-500", "No photos yet" }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-3 gap-3",

            for item in props.items.iter().cloned() {
                div {
                    key: "{item.id}",
                    class: "relative rounded-lg overflow-hidden border border-slate-700 bg-slate-800",

                    img {
                        class: "w-full h-32 object-cover",
                        src: "{item.display_url}",
                        alt: "{item.url}",
                    }

                    button {
                        class: "absolute top-1 right-1 px-2 py-0.5 rounded bg-rose-600 hover:bg-rose-700 text-xs",
                        r#type: "button",
                        disabled: deleting.read().is_some(),
                        onclick: {
                            let backend = services.backend.clone();
                            let on_deleted = props.on_deleted;
                            move |_| {
                                let backend = backend.clone();
                                let item = item.clone();
                                deleting.set(Some(item.url.clone()));
                                spawn(async move {
                                    let deleted = delete_image(backend.as_ref(), &item).await;
                                    deleting.set(None);
                                    if deleted {
                                        APP_STATE
                                            .write()
                                            .ui
                                            .set_status("Photo deleted", StatusLevel::Success);
                                        on_deleted.call(());
                                    } else {
                                        APP_STATE
                                            .write()
                                            .ui
                                            .set_status("Photo could not be deleted", StatusLevel::Error);
                                    }
                                });
                            }
                        },
                        "Delete"
                    }
                }
            }

            for (index, file) in props.pending.iter().enumerate() {
                div {
                    key: "pending-{index}",
                    class: "flex items-center justify-center h-32 rounded-lg border border-dashed border-slate-600 text-xs text-slate-400 p-2 text-center",
                    "{file.name} (not saved)"
                }
            }
        }
    }
}
