//! Output path resolution and file writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{VectorError, VectorResult};
use crate::serialize::render_line;

/// Write one newline-terminated line per vector, in order.
pub fn write_vectors<W: Write>(
    writer: &mut W,
    vectors: &[u64],
    bit_width: u32,
    duplication_factor: u32,
) -> std::io::Result<usize> {
    for &vector in vectors {
        writeln!(writer, "{}", render_line(vector, bit_width, duplication_factor))?;
    }
    Ok(vectors.len())
}

/// Create (or truncate) `path` and write the vectors to it.
///
/// The file is closed when this returns, including on a partial write.
pub fn write_vector_file(
    path: &Path,
    vectors: &[u64],
    bit_width: u32,
    duplication_factor: u32,
) -> VectorResult<usize> {
    let file = File::create(path).map_err(|source| VectorError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = write_buffered(file, path, vectors, bit_width, duplication_factor)?;

    tracing::debug!(path = %path.display(), lines, "wrote vector file");
    Ok(lines)
}

// Takes the sink by value so it is dropped (closed) before returning.
fn write_buffered<W: Write>(
    sink: W,
    path: &Path,
    vectors: &[u64],
    bit_width: u32,
    duplication_factor: u32,
) -> VectorResult<usize> {
    let wrap = |source: std::io::Error| VectorError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(sink);
    let lines = write_vectors(&mut writer, vectors, bit_width, duplication_factor).map_err(wrap)?;
    writer.flush().map_err(wrap)?;
    Ok(lines)
}

/// Join `file_name` onto `base_dir`; absolute names are returned unchanged.
pub fn resolve_against(base_dir: &Path, file_name: &Path) -> PathBuf {
    base_dir.join(file_name)
}

/// Resolve `file_name` against the directory holding the running executable.
pub fn resolve_output_path(file_name: &Path) -> VectorResult<PathBuf> {
    if file_name.is_absolute() {
        return Ok(file_name.to_path_buf());
    }
    let exe = std::env::current_exe()?;
    let base_dir = exe
        .parent()
        .ok_or_else(|| VectorError::ExecutableDir { path: exe.clone() })?;
    Ok(resolve_against(base_dir, file_name))
}
