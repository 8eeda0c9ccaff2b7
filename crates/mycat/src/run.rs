use std::fs::File;
use std::path::PathBuf;

use mycat_io::InputHandle;
use mycat_transfer::{transfer, Mode};

use crate::exit::{input_error, transfer_error, CliResult, SUCCESS};

/// Open every file, then stream them to stdout in order.
pub fn run(mode: Mode, files: &[PathBuf]) -> CliResult<i32> {
    let handles = open_all(files)?;
    let stdout = std::io::stdout();
    transfer(handles, mode, stdout.lock()).map_err(transfer_error)?;
    Ok(SUCCESS)
}

/// Open all paths up front. The first failure wins and nothing is transferred.
pub fn open_all(files: &[PathBuf]) -> CliResult<Vec<InputHandle<File>>> {
    files
        .iter()
        .map(|path| InputHandle::open(path).map_err(input_error))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit::FAILURE;

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mycat-run-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        dir
    }

    #[test]
    fn open_all_keeps_argument_order() {
        let dir = unique_temp_dir("order");
        let first = dir.join("first");
        let second = dir.join("second");
        std::fs::write(&first, b"1").unwrap();
        std::fs::write(&second, b"2").unwrap();

        let handles = open_all(&[second.clone(), first.clone()]).unwrap();
        let labels: Vec<_> = handles.iter().map(|h| h.label().to_string()).collect();
        assert_eq!(
            labels,
            [second.display().to_string(), first.display().to_string()]
        );
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn open_all_fails_on_first_missing_path() {
        let dir = unique_temp_dir("missing");
        let present = dir.join("present");
        std::fs::write(&present, b"x").unwrap();
        let missing = dir.join("missing");

        let err = open_all(&[present, missing.clone()]).unwrap_err();
        assert_eq!(err.code, FAILURE);
        assert!(err.message.contains(&missing.display().to_string()));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn run_without_files_succeeds() {
        assert_eq!(run(Mode::Normal, &[]).unwrap(), SUCCESS);
    }
}
