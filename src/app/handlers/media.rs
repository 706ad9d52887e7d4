//! Image converter and compressor.
//!
//! Files are chosen through the native dialog. Conversion and compression
//! report estimated outcomes after a short processing delay; nothing is
//! written back to disk.

use crate::app::forms::PickedFile;
use crate::app::{BannerSeverity, Message, State};
use crate::core::images::{self, OutputFormat};
use iced::Task;
use std::path::PathBuf;

/// Opens the native picker filtered to supported image types and resolves
/// the chosen file's size.
fn pick_image_file() -> Task<Option<(PathBuf, u64)>> {
    Task::future(async {
        let handle = rfd::AsyncFileDialog::new()
            .add_filter("Images", images::IMAGE_EXTENSIONS)
            .pick_file()
            .await?;
        let path = handle.path().to_path_buf();
        let size = tokio::fs::metadata(&path).await.ok()?.len();
        Some((path, size))
    })
}

pub(crate) fn handle_convert_pick_file(_state: &mut State) -> Task<Message> {
    pick_image_file().map(Message::ConvertFilePicked)
}

pub(crate) fn handle_convert_file_picked(
    state: &mut State,
    picked: Option<(PathBuf, u64)>,
) -> Task<Message> {
    let Some((path, size)) = picked else {
        return Task::none();
    };

    match images::validate_input(&path, size) {
        Ok(()) => {
            state.converter.picked = Some(PickedFile { path, size });
            state.converter.converted = None;
        }
        Err(e) => {
            state.converter.picked = None;
            state.push_banner(e.to_string(), BannerSeverity::Error, 8);
        }
    }
    Task::none()
}

pub(crate) fn handle_convert_format_selected(
    state: &mut State,
    format: OutputFormat,
) -> Task<Message> {
    state.converter.format = format;
    state.converter.converted = None;
    Task::none()
}

pub(crate) fn handle_convert_pressed(state: &mut State) -> Task<Message> {
    if state.converter.picked.is_none() || state.converter.working {
        return Task::none();
    }

    state.converter.working = true;
    Task::perform(tokio::time::sleep(images::PROCESSING_DELAY), |()| {
        Message::ConvertFinished
    })
}

pub(crate) fn handle_convert_finished(state: &mut State) -> Task<Message> {
    state.converter.working = false;
    if let Some(picked) = &state.converter.picked {
        let name = images::converted_name(&picked.path, state.converter.format);
        state.push_banner(
            format!("Converted to {name}"),
            BannerSeverity::Success,
            5,
        );
        state.converter.converted = Some(name);
    }
    Task::none()
}

pub(crate) fn handle_compress_pick_file(_state: &mut State) -> Task<Message> {
    pick_image_file().map(Message::CompressFilePicked)
}

pub(crate) fn handle_compress_file_picked(
    state: &mut State,
    picked: Option<(PathBuf, u64)>,
) -> Task<Message> {
    let Some((path, size)) = picked else {
        return Task::none();
    };

    match images::validate_input(&path, size) {
        Ok(()) => {
            state.compressor.picked = Some(PickedFile { path, size });
            state.compressor.stats = None;
        }
        Err(e) => {
            state.compressor.picked = None;
            state.push_banner(e.to_string(), BannerSeverity::Error, 8);
        }
    }
    Task::none()
}

pub(crate) fn handle_compress_quality_changed(state: &mut State, quality: u8) -> Task<Message> {
    // Snap to the slider's advertised step.
    state.compressor.quality = (quality / images::QUALITY_STEP) * images::QUALITY_STEP;
    state.compressor.stats = None;
    Task::none()
}

pub(crate) fn handle_compress_pressed(state: &mut State) -> Task<Message> {
    if state.compressor.working {
        return Task::none();
    }
    let Some(picked) = &state.compressor.picked else {
        return Task::none();
    };

    match images::estimate_compression(picked.size, state.compressor.quality) {
        Ok(stats) => {
            state.compressor.working = true;
            Task::perform(tokio::time::sleep(images::PROCESSING_DELAY), move |()| {
                Message::CompressFinished(stats)
            })
        }
        Err(e) => {
            state.push_banner(e.to_string(), BannerSeverity::Error, 6);
            Task::none()
        }
    }
}

pub(crate) fn handle_compress_finished(
    state: &mut State,
    stats: images::CompressionStats,
) -> Task<Message> {
    state.compressor.working = false;
    state.compressor.stats = Some(stats);
    Task::none()
}
