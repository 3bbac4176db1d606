//! Path-addressed host storage, read into and written from caller memory.
//!
//! Files bundled with the app are read-only; `dump_file` and `remove_file`
//! only affect the app's writable data directory.

use crate::buffer::File;
use crate::host::Fs;
use crate::Firefly;

impl<H: Fs> Firefly<H> {
    /// Size of the file in bytes, or 0 if it does not exist.
    pub fn get_file_size(&self, path: &str) -> usize {
        usize::try_from(self.host().get_file_size(path)).unwrap_or(0)
    }

    /// Read the file into `buf` and return the written prefix.
    ///
    /// The result never claims more than `buf.len()` bytes, whatever size the
    /// host reports.
    pub fn load_file<'a>(&self, path: &str, buf: &'a mut [u8]) -> File<'a> {
        let reported = self.host().load_file(path, buf) as usize;
        if reported > buf.len() {
            tracing::warn!(
                path,
                reported,
                capacity = buf.len(),
                "file does not fit the buffer, truncated"
            );
        }
        let size = reported.min(buf.len());
        File::new(&buf[..size])
    }

    /// Read the whole file into a fresh allocation sized by
    /// [`Firefly::get_file_size`].
    pub fn load_file_buf(&self, path: &str) -> Vec<u8> {
        let mut buf = vec![0u8; self.get_file_size(path)];
        let size = self.load_file(path, &mut buf).size();
        buf.truncate(size);
        buf
    }

    /// Write `file` into the data directory, replacing any previous contents.
    pub fn dump_file(&self, path: &str, file: File<'_>) {
        tracing::debug!(path, size = file.size(), "dumping file");
        self.host().dump_file(path, file.as_bytes());
    }

    /// Remove a file from the data directory. Removing a bundled file is
    /// rejected by the host and cannot be detected here.
    pub fn remove_file(&self, path: &str) {
        tracing::debug!(path, "removing file");
        self.host().remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::Buffer;
    use crate::host::recording::{Arg, RecordingHost};
    use crate::Firefly;

    #[test]
    fn test_load_file_clamps_to_buffer_capacity() {
        let ff = Firefly::new(RecordingHost::new().with_file("img", vec![5u8; 10]));
        let mut buf = [0u8; 4];
        let file = ff.load_file("img", &mut buf);
        assert_eq!(file.size(), 4);
        assert_eq!(file.as_bytes(), &[5, 5, 5, 5]);
    }

    #[test]
    fn test_load_file_smaller_than_buffer() {
        let ff = Firefly::new(RecordingHost::new().with_file("save", b"hey".to_vec()));
        let mut buf = [0u8; 16];
        let file = ff.load_file("save", &mut buf);
        assert_eq!(file.as_bytes(), b"hey");
        let call = ff.host().last_call().unwrap();
        assert_eq!(call.args, vec![Arg::Str("save".into()), Arg::U32(16)]);
    }

    #[test]
    fn test_load_file_missing() {
        let ff = Firefly::new(RecordingHost::new());
        let mut buf = [0u8; 16];
        assert!(ff.load_file("nope", &mut buf).is_empty());
        assert_eq!(ff.get_file_size("nope"), 0);
    }

    #[test]
    fn test_get_file_size_negative_is_zero() {
        let ff = Firefly::new(RecordingHost::new().with_return("get_file_size", -1));
        assert_eq!(ff.get_file_size("x"), 0);
    }

    #[test]
    fn test_load_file_buf_allocates_exact_size() {
        let ff = Firefly::new(RecordingHost::new().with_file("font", vec![1u8; 97]));
        let bytes = ff.load_file_buf("font");
        assert_eq!(bytes.len(), 97);
    }

    #[test]
    fn test_dump_then_remove() {
        let ff = Firefly::new(RecordingHost::new());
        ff.dump_file("save", Buffer::new(b"state"));
        assert_eq!(ff.host().file("save"), Some(b"state".to_vec()));
        ff.remove_file("save");
        assert_eq!(ff.host().file("save"), None);
        let names: Vec<_> = ff.host().calls().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["dump_file", "remove_file"]);
    }
}
