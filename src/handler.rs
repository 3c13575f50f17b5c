//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::capacity::{capacity, max_message_len};
use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{HIDDEN_IMAGE_PREFIX, RECOVERED_TEXT_PREFIX};
use crate::error::Error;
use crate::raster::RasterBuffer;
use crate::signature::WireFormat;
use crate::steganography::{decode_with_format, encode_with};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、调用隐写核心嵌入带签名的文本，最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及选项的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像或文本文件。
/// * 文本包含被禁止的内容，或图像没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = match args.dest {
        Some(dest) => dest,
        None => default_output_path(&args.image, HIDDEN_IMAGE_PREFIX, "png")?,
    };
    ensure_writable(&dest, args.force)?;

    let carrier = load_raster(&args.image)?;

    let text = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let wire_format = WireFormat::from(args.format);
    let stego = match encode_with(&carrier, &text, wire_format) {
        Ok(stego) => stego,
        Err(err @ Error::CapacityExceeded { .. }) => {
            let context = format!(
                "Failed to hide '{}': the text encodes to {} bytes, but this image holds at most {} bytes.",
                args.text.to_string_lossy().red().bold(),
                wire_format.encode_text(&text).len(),
                max_message_len(carrier.width(), carrier.height())
            );
            return Err(anyhow::Error::new(err).context(context));
        }
        Err(err) => {
            let context = format!(
                "Failed to hide '{}' in the image.",
                args.text.to_string_lossy().red().bold()
            );
            return Err(anyhow::Error::new(err).context(context));
        }
    };

    stego.into_image()?.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用恢复核心函数校验签名并提取文本，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及选项的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 图像中没有本工具写入的签名，或恢复出的文本包含被禁止的内容。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = match args.text {
        Some(text) => text,
        None => default_output_path(&args.image, RECOVERED_TEXT_PREFIX, "txt")?,
    };
    ensure_writable(&dest, args.force)?;

    let carrier = load_raster(&args.image)?;

    let (format, text) = decode_with_format(&carrier).with_context(|| {
        format!(
            "Failed to recover the hidden text from '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text ({:?}) has been successfully recovered and saved: {}",
        format,
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 图像容量的查询结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    /// 可容纳的总字节数 (含签名与结束符)。
    pub capacity: usize,
    /// 可隐藏的最长文本 (字节)。
    pub max_message_len: usize,
}

/// 读取图像并计算其容量。
///
/// # Errors
///
/// 无法读取或解码图像文件时返回错误。
pub fn inspect_capacity(path: &Path) -> Result<CapacityReport> {
    let carrier = load_raster(path)?;
    let (width, height) = (carrier.width(), carrier.height());

    Ok(CapacityReport {
        width,
        height,
        capacity: capacity(width, height),
        max_message_len: max_message_len(width, height),
    })
}

/// 处理 'Capacity' 命令的执行逻辑：打印图像的容量以及可隐藏的最长文本。
///
/// # Errors
///
/// 无法读取或解码图像文件时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let report = inspect_capacity(&args.image)?;

    println!(
        "{} ({}x{}): capacity {} bytes, longest message {} bytes",
        args.image.to_string_lossy().bold(),
        report.width,
        report.height,
        report.capacity.to_string().green().bold(),
        report.max_message_len.to_string().green().bold()
    );
    Ok(())
}

fn load_raster(path: &Path) -> Result<RasterBuffer> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    Ok(image.to_rgba8().into())
}

/// 在输入文件同目录下生成 `<prefix><文件名>.<extension>`。
fn default_output_path(input: &Path, prefix: &str, extension: &str) -> Result<PathBuf> {
    let stem = input.file_stem().with_context(|| {
        format!(
            "Cannot derive an output file name from: {}",
            input.to_string_lossy().red().bold()
        )
    })?;
    let name = format!("{prefix}{}.{extension}", stem.to_string_lossy());
    Ok(input.with_file_name(name))
}

fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}
