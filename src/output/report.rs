//! Headers and summaries around each view

use std::io;
use std::path::Path;

use super::line::TreeOutput;
use crate::large::Threshold;
use crate::size::format_size;

/// Header of the full tree view.
pub fn write_tree_header<O: TreeOutput>(out: &mut O, root: &Path, total: u64) -> io::Result<()> {
    out.blank()?;
    out.text(&format!("Análisis de: {}", root.display()))?;
    out.blank()?;
    out.text(&format!("Tamaño total: {}", format_size(total)))?;
    out.blank()?;
    out.text("Contenido ordenado por tamaño (de mayor a menor):")?;
    out.blank()
}

/// Trailing blank line after the full tree.
pub fn write_tree_footer<O: TreeOutput>(out: &mut O) -> io::Result<()> {
    out.blank()
}

/// Header of the directories-only view.
pub fn write_dirs_header<O: TreeOutput>(out: &mut O, root: &Path, total: u64) -> io::Result<()> {
    out.blank()?;
    out.text(&format!("Análisis de directorios en: {}", root.display()))?;
    out.blank()?;
    out.text(&format!("Tamaño total: {}", format_size(total)))?;
    out.blank()?;
    out.text("Directorios ordenados por tamaño (de mayor a menor):")?;
    out.blank()
}

/// Header of the large-files view, printed before the search runs.
pub fn write_large_header<O: TreeOutput>(
    out: &mut O,
    root: &Path,
    threshold: Threshold,
) -> io::Result<()> {
    out.blank()?;
    out.text(&format!("Análisis de archivos grandes en: {}", root.display()))?;
    out.text(&format!(
        "Mostrando solo archivos mayores a {} MB",
        threshold
    ))?;
    out.blank()
}

/// Message when no file passes the threshold.
pub fn write_large_empty<O: TreeOutput>(out: &mut O, threshold: Threshold) -> io::Result<()> {
    out.text(&format!(
        "No se encontraron archivos mayores a {} MB en el directorio especificado.",
        threshold
    ))
}

/// Counts and totals printed before the grouped large-file tree.
pub fn write_large_summary<O: TreeOutput>(
    out: &mut O,
    count: usize,
    large_total: u64,
    dir_total: u64,
) -> io::Result<()> {
    out.text(&format!("Total de archivos grandes encontrados: {}", count))?;
    out.text(&format!(
        "Tamaño total de archivos grandes: {}",
        format_size(large_total)
    ))?;
    out.text(&format!(
        "Tamaño total del directorio: {}",
        format_size(dir_total)
    ))?;
    out.blank()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::LineBuffer;

    #[test]
    fn test_tree_header() {
        let mut out = LineBuffer::new();
        write_tree_header(&mut out, Path::new("/data"), 2048).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "",
                "Análisis de: /data",
                "",
                "Tamaño total: 2.0 KB",
                "",
                "Contenido ordenado por tamaño (de mayor a menor):",
                "",
            ]
        );
    }

    #[test]
    fn test_dirs_header_with_empty_total() {
        let mut out = LineBuffer::new();
        write_dirs_header(&mut out, Path::new("/empty"), 0).unwrap();
        assert_eq!(out.lines()[1], "Análisis de directorios en: /empty");
        assert_eq!(out.lines()[3], "Tamaño total: 0B");
    }

    #[test]
    fn test_large_header_threshold_display() {
        let mut out = LineBuffer::new();
        write_large_header(&mut out, Path::new("/srv"), Threshold::default()).unwrap();
        write_large_empty(&mut out, Threshold::explicit(2.5)).unwrap();
        write_large_empty(&mut out, Threshold::explicit(4.0)).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "",
                "Análisis de archivos grandes en: /srv",
                "Mostrando solo archivos mayores a 98 MB",
                "",
                "No se encontraron archivos mayores a 2.5 MB en el directorio especificado.",
                "No se encontraron archivos mayores a 4.0 MB en el directorio especificado.",
            ]
        );
    }

    #[test]
    fn test_large_summary() {
        let mut out = LineBuffer::new();
        write_large_summary(&mut out, 2, 3 * 1024 * 1024, 4 * 1024 * 1024).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "Total de archivos grandes encontrados: 2",
                "Tamaño total de archivos grandes: 3.0 MB",
                "Tamaño total del directorio: 4.0 MB",
                "",
            ]
        );
    }
}
