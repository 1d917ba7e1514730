//! Upload zone: file input, drop target, validation and preview.

use super::{ErrorDisplay, PreviewBox};
use crate::browser::BrowserFile;
use crate::dom;
use crate::dropzone::DropZoneBinding;
use crate::state::UploadState;
use avwx_core::preview::PreviewState;
use avwx_core::upload::{FileMeta, PreviewKind, UploadSlot};
use dioxus::prelude::*;
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    pub slot: UploadSlot,
    pub upload: UploadState,
    /// Hidden zones stay mounted so their input and drop listeners survive.
    #[props(default = true)]
    pub visible: bool,
    /// A file passed validation and was attached.
    pub on_attached: Option<EventHandler<BrowserFile>>,
    /// The attached file was removed with the close control.
    pub on_cleared: Option<EventHandler<()>>,
}

#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let slot = props.slot;
    let mut upload = props.upload;
    let on_attached = props.on_attached;
    let on_cleared = props.on_cleared;
    let mut rejection = use_signal(|| None::<String>);

    let binding: Rc<RefCell<Option<DropZoneBinding>>> = use_hook(|| Rc::new(RefCell::new(None)));
    use_effect(move || {
        let mut binding = binding.borrow_mut();
        if binding.is_none() {
            *binding = DropZoneBinding::bind(slot.zone_id(), slot.input_id());
            debug!("drop zone {} bound: {}", slot.zone_id(), binding.is_some());
        }
    });

    let on_change = move |_evt: Event<FormData>| {
        let Some(file) = dom::selected_file(slot.input_id()) else {
            return;
        };
        if let Err(e) = slot.validate(&file) {
            warn!("rejected {}: {}", file.file_name(), e);
            rejection.set(Some(e.to_string()));
            dom::clear_file_input(slot.input_id());
            return;
        }
        rejection.set(None);
        upload.file.set(Some(file.clone()));

        match slot.preview_kind() {
            PreviewKind::PdfNotice => {
                upload
                    .preview
                    .write()
                    .show(PreviewState::pdf_notice(file.file_name()));
            }
            PreviewKind::TextHead => {
                let ticket = upload.preview.write().begin(Some(file.file_name()));
                let reading = file.clone();
                spawn(async move {
                    let read = reading.read_text().await.map_err(dom::js_error_message);
                    upload.preview.write().settle_read(ticket, read);
                });
            }
        }
        if let Some(handler) = on_attached {
            handler.call(file);
        }
    };

    let on_close = move |_: ()| {
        upload.clear(slot);
        if let Some(handler) = on_cleared {
            handler.call(());
        }
    };

    let label = slot.label();
    let display = if props.visible { "block" } else { "none" };
    let preview = upload.preview.read().state().clone();

    rsx! {
        div {
            class: "upload-box",
            style: "display: {display}; margin: 8px 0;",
            label {
                id: slot.zone_id(),
                class: "upload-area",
                style: "display: flex; flex-direction: column; align-items: center; gap: 4px; padding: 20px; border: 2px dashed #90A4AE; border-radius: 6px; cursor: pointer; background: #fff;",
                input {
                    id: slot.input_id(),
                    r#type: "file",
                    accept: slot.accept(),
                    style: "display: none;",
                    onchange: on_change,
                }
                strong { "{label}" }
                span { style: "font-size: 12px; color: #666;", "Drag and drop a file here, or click to browse" }
            }
            if let Some(message) = rejection() {
                ErrorDisplay { message }
            }
            PreviewBox {
                preview,
                on_close: on_close,
            }
        }
    }
}
