//! Export the rendered card as a PNG.
//!
//! The card content is re-expressed as an SVG snapshot and handed to the
//! platform rasterizer: an offscreen canvas on the web, resvg on native.
//! Delivery is a browser download or a file under the per-user export
//! directory. Failures stay inside this panel — they are logged and the
//! panel returns to idle; the lookup state is never touched.

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::profile::SolvedStats;

use super::snapshot::{svg_snapshot, SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};

/// Pixel-density multiplier applied when rasterizing the snapshot.
pub const RASTER_SCALE: f32 = 2.0;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
}

/// Output filename for a card export.
pub fn export_filename(username: &str) -> String {
    format!("{username}-leetcode-stats.png")
}

/// One-button export panel. Only rendered alongside a card, so exporting
/// without fetched stats cannot happen.
#[component]
pub fn CardExportPanel(stats: SolvedStats, username: String) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("card-export__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "card-export__meta card-export__meta--success".to_string(),
            message.clone(),
        )),
    };

    let png_handler = {
        let stats = stats.clone();
        let username = username.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing PNG"));
            let stats = stats.clone();
            let username = username.clone();

            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                let mut busy_signal = busy_signal;
                platform::spawn_future(async move {
                    let outcome = perform_png_export(&stats, &username).await;
                    apply_outcome(outcome, &mut status_signal);
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(perform_png_export(&stats, &username));
                apply_outcome(outcome, &mut status_signal);
                busy_signal.set(false);
            }
        }
    };

    rsx! {
        div { class: "card-export",
            button {
                r#type: "button",
                class: "button button--accent",
                disabled: busy(),
                onclick: png_handler,
                "Download Card"
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn apply_outcome(outcome: Result<String, String>, status: &mut Signal<ExportStatus>) {
    match outcome {
        Ok(message) => status.set(ExportStatus::Done(message)),
        Err(err) => {
            error!(%err, "card export failed");
            status.set(ExportStatus::Idle);
        }
    }
}

async fn perform_png_export(stats: &SolvedStats, username: &str) -> Result<String, String> {
    let svg = svg_snapshot(stats, username);
    let png_bytes = rasterize_svg(&svg, RASTER_SCALE).await?;
    let filename = export_filename(username);
    let delivery = deliver_png(&filename, png_bytes).await?;
    info!(%filename, "card export delivered");

    Ok(match delivery {
        Some(path) => format!("Card saved to {path}"),
        None => "Card download started".to_string(),
    })
}

#[cfg(target_arch = "wasm32")]
async fn rasterize_svg(svg: &str, scale: f32) -> Result<Vec<u8>, String> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    let width = (SNAPSHOT_WIDTH as f32 * scale) as u32;
    let height = (SNAPSHOT_HEIGHT as f32 * scale) as u32;

    let mut opts = BlobPropertyBag::new();
    opts.type_("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(svg));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| "Unable to build SVG blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create SVG URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| "Unable to create canvas")?
        .dyn_into()
        .map_err(|_| "Canvas cast failed")?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "Canvas context unavailable")?
        .ok_or("Canvas context missing")?
        .dyn_into()
        .map_err(|_| "Context cast failed")?;

    let image = HtmlImageElement::new().map_err(|_| "Unable to create image")?;
    let decode = image.decode();
    image.set_src(&url);
    JsFuture::from(decode)
        .await
        .map_err(|_| "Image decode failed")?;

    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        )
        .map_err(|_| "Unable to draw image")?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| "Unable to serialise canvas")?;
    Url::revoke_object_url(&url).ok();

    let bytes = base64::decode(data_url.split(',').nth(1).ok_or("Malformed data URL")?)
        .map_err(|_| "PNG decode failed")?;

    Ok(bytes)
}

#[cfg(not(target_arch = "wasm32"))]
async fn rasterize_svg(svg: &str, scale: f32) -> Result<Vec<u8>, String> {
    use usvg::fontdb;

    let mut fonts = fontdb::Database::new();
    fonts.load_system_fonts();
    let options = usvg::Options {
        fontdb: std::sync::Arc::new(fonts),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(svg, &options).map_err(|err| err.to_string())?;

    let width = (SNAPSHOT_WIDTH as f32 * scale) as u32;
    let height = (SNAPSHOT_HEIGHT as f32 * scale) as u32;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or_else(|| "Unable to allocate pixmap".to_string())?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap.encode_png().map_err(|err| err.to_string())
}

async fn deliver_png(filename: &str, bytes: Vec<u8>) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let mut opts = BlobPropertyBag::new();
        opts.type_("image/png");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let dir = export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("dev", "LeetCard", "LeetCard")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
