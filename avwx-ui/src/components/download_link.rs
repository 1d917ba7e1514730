use crate::browser::download_url;
use avwx_core::api::Artifact;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DownloadLinkProps {
    pub artifact: Artifact,
    pub file_path: String,
}

#[component]
pub fn DownloadLink(props: DownloadLinkProps) -> Element {
    let href = download_url(props.artifact, &props.file_path);
    let label = props.artifact.label();
    rsx! {
        a {
            href: "{href}",
            download: "",
            style: "display: inline-block; margin: 4px 8px 4px 0; padding: 6px 12px; background: #1565C0; color: #fff; border-radius: 4px; text-decoration: none;",
            "{label}"
        }
    }
}
