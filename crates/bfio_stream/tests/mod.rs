use bfio_stream::{
    BufferOptions, DynamicBuffer, Error, FileStream, FixedBuffer, INITIAL_RESERVED, Result,
    Seekable, SizeProbe, SliceReader, Sink, Source, Stream,
};
use std::fs::{File, OpenOptions};
use std::io::SeekFrom;
use tempfile::TempDir;

/// Helper to create an empty buffer with no up-front reservation
fn unreserved_buffer() -> Result<DynamicBuffer> {
    DynamicBuffer::with_options(BufferOptions::default().with_initial_reserved(0))
}

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

// ============================================================================
// DynamicBuffer
// ============================================================================

#[test]
fn test_dynamic_buffer_creation() {
    let buffer = DynamicBuffer::new();

    assert_eq!(buffer.len(), 0);
    assert!(buffer.is_empty());
    assert_eq!(buffer.tell(), 0);
    assert_eq!(buffer.reserved(), INITIAL_RESERVED);
}

#[test]
fn test_dynamic_buffer_options_round_reservation() -> Result<()> {
    let buffer = DynamicBuffer::with_options(BufferOptions::new(100))?;
    assert_eq!(buffer.reserved(), 128);
    assert_eq!(buffer.len(), 0);

    let buffer = unreserved_buffer()?;
    assert_eq!(buffer.reserved(), 0);

    Ok(())
}

#[test]
fn test_dynamic_buffer_grow() -> Result<()> {
    let mut buffer = DynamicBuffer::new();

    buffer.write(&pattern(33))?;

    assert_eq!(buffer.len(), 33);
    assert_eq!(buffer.tell(), 33);
    assert_eq!(buffer.reserved(), 64);
    assert_eq!(buffer.as_slice(), pattern(33).as_slice());

    Ok(())
}

#[test]
fn test_dynamic_buffer_capacity_law() -> Result<()> {
    let chunks = [1usize, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987];

    let mut buffer = unreserved_buffer()?;
    let mut total = 0;
    for chunk in chunks {
        buffer.write(&pattern(chunk))?;
        total += chunk;

        assert_eq!(buffer.len(), total);
        assert_eq!(buffer.reserved(), total.next_power_of_two());
    }

    // With the default reservation the law only kicks in past 16 bytes
    let mut buffer = DynamicBuffer::new();
    let mut total = 0;
    for chunk in chunks {
        buffer.write(&pattern(chunk))?;
        total += chunk;

        assert_eq!(buffer.len(), total);
        assert_eq!(buffer.reserved(), total.next_power_of_two().max(INITIAL_RESERVED));
    }

    Ok(())
}

#[test]
fn test_dynamic_buffer_write_read_back() -> Result<()> {
    let mut buffer = DynamicBuffer::new();
    buffer.write(&5i32.to_ne_bytes())?;

    buffer.seek(0);
    let mut out = [0u8; 4];
    buffer.read(&mut out)?;

    assert_eq!(i32::from_ne_bytes(out), 5);
    assert_eq!(stream.remaining_hint(), None);
    assert_eq!(buffer.tell(), 4);

    Ok(())
}

#[test]
fn test_dynamic_buffer_short_read() -> Result<()> {
    let mut buffer = DynamicBuffer::new();
    buffer.write(b"abcdef")?;
    buffer.seek(2);

    let mut out = [0u8; 10];
    let err = buffer.read(&mut out).unwrap_err();

    assert!(matches!(
        err,
        Error::ShortRead {
            requested: 10,
            available: 4
        }
    ));
    // Only the copied prefix is specified
    assert_eq!(&out[..4], b"cdef");
    assert_eq!(buffer.tell(), buffer.len());

    Ok(())
}

#[test]
fn test_dynamic_buffer_read_past_end_after_seek() -> Result<()> {
    let mut buffer = DynamicBuffer::new();
    buffer.write(b"abc")?;
    buffer.seek(100);

    let mut out = [0u8; 2];
    let err = buffer.read(&mut out).unwrap_err();

    assert!(matches!(err, Error::ShortRead { available: 0, .. }));
    assert_eq!(buffer.tell(), 3);

    Ok(())
}

#[test]
fn test_dynamic_buffer_write_after_seek_past_end() -> Result<()> {
    let mut buffer = unreserved_buffer()?;
    buffer.write(b"ab")?;
    buffer.seek(40);
    buffer.write(b"cd")?;

    assert_eq!(buffer.len(), 42);
    assert_eq!(buffer.reserved(), 64);
    assert_eq!(&buffer.as_slice()[..2], b"ab");
    assert_eq!(&buffer.as_slice()[40..], b"cd");

    Ok(())
}

#[test]
fn test_dynamic_buffer_empty_write_past_end_extends_len() -> Result<()> {
    let mut buffer = unreserved_buffer()?;
    buffer.write(b"ab")?;
    buffer.seek(10);
    buffer.write(&[])?;

    assert_eq!(buffer.len(), 10);
    assert_eq!(buffer.tell(), 10);
    assert_eq!(buffer.reserved(), 16);
    assert_eq!(&buffer.as_slice()[..2], b"ab");

    // Inside the valid window an empty write changes nothing
    buffer.seek(4);
    buffer.write(&[])?;
    assert_eq!(buffer.len(), 10);

    Ok(())
}

#[test]
fn test_dynamic_buffer_remaining_hint() -> Result<()> {
    let mut buffer = DynamicBuffer::from_bytes(b"0123456789")?;
    assert_eq!(buffer.remaining_hint(), Some(10));

    let mut out = [0u8; 4];
    buffer.read(&mut out)?;
    assert_eq!(buffer.remaining_hint(), Some(6));

    buffer.seek(20);
    assert_eq!(buffer.remaining_hint(), Some(0));

    Ok(())
}

#[test]
fn test_dynamic_buffer_overwrite_keeps_len() -> Result<()> {
    let mut buffer = DynamicBuffer::new();
    buffer.write(b"hello world")?;

    buffer.seek(0);
    buffer.write(b"J")?;

    assert_eq!(buffer.len(), 11);
    assert_eq!(buffer.as_slice(), b"Jello world");
    assert_eq!(buffer.tell(), 1);

    Ok(())
}

#[test]
fn test_dynamic_buffer_resize() -> Result<()> {
    let mut buffer = DynamicBuffer::new();
    buffer.write(&pattern(20))?;
    assert_eq!(buffer.reserved(), 32);

    // Shrinking moves the logical end only
    buffer.resize(5)?;
    assert_eq!(buffer.len(), 5);
    assert_eq!(buffer.reserved(), 32);
    assert_eq!(buffer.as_slice(), &pattern(20)[..5]);

    // Growing within the reservation revalidates without reallocating
    buffer.resize(20)?;
    assert_eq!(buffer.reserved(), 32);
    assert_eq!(buffer.as_slice(), pattern(20).as_slice());

    // Growing past it keeps existing bytes
    buffer.resize(33)?;
    assert_eq!(buffer.reserved(), 64);
    assert_eq!(&buffer.as_slice()[..20], pattern(20).as_slice());

    Ok(())
}

#[test]
fn test_dynamic_buffer_resize_overflow() {
    let mut buffer = DynamicBuffer::new();

    let err = buffer.resize(usize::MAX).unwrap_err();

    assert!(matches!(err, Error::CapacityOverflow { .. }));
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.reserved(), INITIAL_RESERVED);
}

#[test]
fn test_dynamic_buffer_clear_keeps_allocation() -> Result<()> {
    let mut buffer = DynamicBuffer::new();
    buffer.write(&pattern(100))?;

    buffer.clear();

    assert!(buffer.is_empty());
    assert_eq!(buffer.tell(), 0);
    assert_eq!(buffer.reserved(), 128);

    Ok(())
}

#[test]
fn test_dynamic_buffer_from_bytes_and_into_vec() -> Result<()> {
    let mut buffer = DynamicBuffer::from_bytes(b"payload")?;

    assert_eq!(buffer.len(), 7);
    assert_eq!(buffer.tell(), 0);
    assert_eq!(buffer.reserved(), 8);

    let mut out = [0u8; 3];
    buffer.read(&mut out)?;
    assert_eq!(&out, b"pay");
    assert_eq!(buffer.remaining(), 4);

    assert_eq!(buffer.into_vec(), b"payload".to_vec());

    Ok(())
}

// ============================================================================
// FixedBuffer / SliceReader
// ============================================================================

#[test]
fn test_fixed_buffer_exact_fit() -> Result<()> {
    let mut storage = [0u8; 33];
    let mut buffer = FixedBuffer::new(&mut storage);

    buffer.write(&pattern(33))?;

    assert_eq!(buffer.len(), 33);
    assert_eq!(buffer.tell(), 33);
    assert_eq!(buffer.remaining(), 0);

    Ok(())
}

#[test]
fn test_fixed_buffer_overflow() {
    let mut storage = [0u8; 16];
    let data = pattern(20);

    let mut buffer = FixedBuffer::new(&mut storage);
    let err = buffer.write(&data).unwrap_err();

    assert!(matches!(
        err,
        Error::ShortWrite {
            requested: 20,
            written: 16
        }
    ));
    assert_eq!(buffer.len(), 16);
    assert_eq!(buffer.tell(), 16);
    assert_eq!(buffer.as_slice(), &data[..16]);
}

#[test]
fn test_fixed_buffer_write_after_full() {
    let mut storage = [0u8; 4];
    let mut buffer = FixedBuffer::new(&mut storage);

    buffer.write(b"abcd").unwrap();
    let err = buffer.write(b"e").unwrap_err();

    assert!(matches!(err, Error::ShortWrite { written: 0, .. }));
    assert_eq!(buffer.as_slice(), b"abcd");
}

#[test]
fn test_fixed_buffer_write_read_back() -> Result<()> {
    let mut storage = [0u8; 33];
    let mut buffer = FixedBuffer::new(&mut storage);

    buffer.write(&5i32.to_ne_bytes())?;
    buffer.seek(0);
    let mut out = [0u8; 4];
    buffer.read(&mut out)?;

    assert_eq!(i32::from_ne_bytes(out), 5);

    Ok(())
}

#[test]
fn test_fixed_buffer_short_read() {
    let mut storage = *b"0123456789";
    let mut buffer = FixedBuffer::new(&mut storage);
    buffer.seek(7);

    let mut out = [0u8; 5];
    let err = buffer.read(&mut out).unwrap_err();

    assert!(matches!(
        err,
        Error::ShortRead {
            requested: 5,
            available: 3
        }
    ));
    assert_eq!(&out[..3], b"789");
    assert_eq!(buffer.tell(), 10);
}

#[test]
fn test_fixed_buffer_seek_past_end() {
    let mut storage = [0u8; 8];
    let mut buffer = FixedBuffer::new(&mut storage);
    buffer.seek(20);

    let err = buffer.write(b"x").unwrap_err();

    assert!(matches!(err, Error::ShortWrite { written: 0, .. }));
    assert_eq!(buffer.tell(), 8);
}

#[test]
fn test_slice_reader() -> Result<()> {
    let data = b"hello";
    let mut reader = SliceReader::new(data);

    let mut out = [0u8; 2];
    reader.read(&mut out)?;
    assert_eq!(&out, b"he");
    assert_eq!(reader.rest(), b"llo");

    let mut out = [0u8; 4];
    let err = reader.read(&mut out).unwrap_err();
    assert!(matches!(err, Error::ShortRead { available: 3, .. }));
    assert_eq!(&out[..3], b"llo");
    assert_eq!(reader.remaining(), 0);
    assert!(reader.rest().is_empty());

    Ok(())
}

#[test]
fn test_fixed_remaining_hint() -> Result<()> {
    let data = b"hello";
    let mut reader = SliceReader::new(data);
    let mut out = [0u8; 2];
    reader.read(&mut out)?;
    assert_eq!(reader.remaining_hint(), Some(3));

    let mut storage = [0u8; 8];
    let mut buffer = FixedBuffer::new(&mut storage);
    assert_eq!(buffer.remaining_hint(), Some(8));
    buffer.seek(6);
    assert_eq!(buffer.remaining_hint(), Some(2));

    Ok(())
}

// ============================================================================
// FileStream
// ============================================================================

#[test]
fn test_file_stream_write_read_back() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("test.bin");

    let mut stream = FileStream::new(File::create(&path)?);
    stream.write(&5i32.to_ne_bytes())?;
    stream.flush()?;
    drop(stream);

    let mut stream = FileStream::from(File::open(&path)?);
    let mut out = [0u8; 4];
    stream.read(&mut out)?;

    assert_eq!(i32::from_ne_bytes(out), 5);

    Ok(())
}

#[test]
fn test_file_stream_short_read_is_failure() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("short.bin");
    std::fs::write(&path, b"abc")?;

    let mut stream = FileStream::new(File::open(&path)?);
    let mut out = [0u8; 8];
    let err = stream.read(&mut out).unwrap_err();

    assert!(matches!(err, Error::IO(_)));

    Ok(())
}

#[test]
fn test_file_stream_seek() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("seek.bin");

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;
    let mut stream = FileStream::new(file);
    stream.write(b"0123456789")?;

    assert_eq!(stream.position()?, 10);
    assert_eq!(stream.seek_to(SeekFrom::End(-4))?, 6);

    let mut out = [0u8; 4];
    stream.read(&mut out)?;
    assert_eq!(&out, b"6789");

    Ok(())
}

// ============================================================================
// SizeProbe
// ============================================================================

#[test]
fn test_size_probe_counts() -> Result<()> {
    let mut probe = SizeProbe::new();
    assert!(probe.is_empty());

    probe.write(&[0; 8])?;
    probe.write(&[0; 3])?;
    probe.write(&[])?;

    assert_eq!(probe.len(), 11);

    Ok(())
}

#[test]
fn test_streams_through_references() -> Result<()> {
    fn fill(sink: &mut dyn Sink) -> Result<()> {
        sink.write(b"xyz")
    }

    let mut buffer = DynamicBuffer::new();
    fill(&mut buffer)?;

    let mut boxed: Box<dyn Sink> = Box::new(SizeProbe::new());
    fill(&mut boxed)?;

    assert_eq!(buffer.as_slice(), b"xyz");

    Ok(())
}

#[test]
fn test_bidirectional_streams() -> Result<()> {
    fn echo<S: Stream + Seekable>(stream: &mut S, bytes: &[u8]) -> Result<Vec<u8>> {
        stream.write(bytes)?;
        stream.rewind();
        let mut out = vec![0; bytes.len()];
        stream.read(&mut out)?;
        Ok(out)
    }

    assert_eq!(echo(&mut DynamicBuffer::new(), b"dynamic")?, b"dynamic");

    let mut storage = [0u8; 5];
    assert_eq!(echo(&mut FixedBuffer::new(&mut storage), b"fixed")?, b"fixed");

    Ok(())
}
