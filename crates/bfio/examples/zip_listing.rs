//! Lists the entries of a zip archive by walking its central directory.
//!
//! Usage: `cargo run --example zip_listing -- archive.zip`
//!
//! The end of central directory record is expected to close the file, so
//! archives carrying a trailing comment are rejected. Fields are read in
//! native byte order, which matches the format on little-endian hosts only.

use std::{env, fs::File, io::SeekFrom};

use bfio::{FileStream, Source, SourceExt, fixed_size};

const CENTRAL_DIRECTORY_FILE_HEADER: u32 = 0x02014b50;
const END_OF_CENTRAL_DIRECTORY: u32 = 0x06054b50;
const LOCAL_FILE_HEADER: u32 = 0x04034b50;

#[derive(Debug, Default)]
struct DataDescriptor {
    crc32: u32,
    compressed_size: u32,
    uncompressed_size: u32,
}

#[derive(Debug, Default)]
struct CentralDirectoryHeader {
    signature: u32,
    version_made_by: u16,
    version_needed: u16,
    flags: u16,
    compression_method: u16,
    last_mod_time: u16,
    last_mod_date: u16,
    data_descriptor: DataDescriptor,
    file_name_length: u16,
    extra_field_length: u16,
    file_comment_length: u16,
    disk_number_start: u16,
    internal_attributes: u16,
    external_attributes: u32,
    local_header_offset: u32,
}

#[derive(Debug, Default)]
struct EndOfCentralDirectoryRecord {
    signature: u32,
    disk_number: u16,
    central_directory_disk: u16,
    entries_on_disk: u16,
    total_entries: u16,
    central_directory_size: u32,
    central_directory_offset: u32,
    comment_length: u16,
}

#[derive(Debug, Default)]
struct LocalFileHeader {
    signature: u32,
    version_needed: u16,
    flags: u16,
    compression_method: u16,
    last_mod_time: u16,
    last_mod_date: u16,
    data_descriptor: DataDescriptor,
    file_name_length: u16,
    extra_field_length: u16,
}

bfio::aggregate! {
    DataDescriptor { crc32: u32, compressed_size: u32, uncompressed_size: u32 }
    CentralDirectoryHeader {
        signature: u32,
        version_made_by: u16,
        version_needed: u16,
        flags: u16,
        compression_method: u16,
        last_mod_time: u16,
        last_mod_date: u16,
        data_descriptor: DataDescriptor,
        file_name_length: u16,
        extra_field_length: u16,
        file_comment_length: u16,
        disk_number_start: u16,
        internal_attributes: u16,
        external_attributes: u32,
        local_header_offset: u32,
    }
    EndOfCentralDirectoryRecord {
        signature: u32,
        disk_number: u16,
        central_directory_disk: u16,
        entries_on_disk: u16,
        total_entries: u16,
        central_directory_size: u32,
        central_directory_offset: u32,
        comment_length: u16,
    }
    LocalFileHeader {
        signature: u32,
        version_needed: u16,
        flags: u16,
        compression_method: u16,
        last_mod_time: u16,
        last_mod_date: u16,
        data_descriptor: DataDescriptor,
        file_name_length: u16,
        extra_field_length: u16,
    }
}

fn check(signature: u32, expected: u32, what: &str) -> Result<(), Box<dyn std::error::Error>> {
    if signature != expected {
        return Err(format!("Bad {what} signature: {signature:#010x}").into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args().nth(1).unwrap_or_else(|| "archive.zip".to_string());
    let mut stream = FileStream::new(File::open(&path)?);

    let record_size = fixed_size::<EndOfCentralDirectoryRecord>()?;
    stream.seek_to(SeekFrom::End(-(record_size as i64)))?;

    let eocd: EndOfCentralDirectoryRecord = stream.get()?;
    check(eocd.signature, END_OF_CENTRAL_DIRECTORY, "end of central directory")?;

    stream.seek_to(SeekFrom::Start(eocd.central_directory_offset.into()))?;

    for _ in 0..eocd.total_entries {
        let header: CentralDirectoryHeader = stream.get()?;
        check(header.signature, CENTRAL_DIRECTORY_FILE_HEADER, "central directory")?;

        let next = stream.position()?;

        stream.seek_to(SeekFrom::Start(header.local_header_offset.into()))?;
        let local: LocalFileHeader = stream.get()?;
        check(local.signature, LOCAL_FILE_HEADER, "local file header")?;

        let mut name = vec![0; local.file_name_length.into()];
        stream.read(&mut name)?;
        println!("{}", String::from_utf8_lossy(&name));

        // Stored entries without a trailing data descriptor can be printed as is
        let size = local.data_descriptor.uncompressed_size as usize;
        if size != 0 && local.compression_method == 0 && local.flags & 1 == 0 {
            stream.seek_to(SeekFrom::Current(local.extra_field_length.into()))?;
            let mut content = vec![0; size];
            stream.read(&mut content)?;
            println!("\tFile content:");
            println!("{}", String::from_utf8_lossy(&content));
        }

        let skip = u64::from(header.file_name_length)
            + u64::from(header.extra_field_length)
            + u64::from(header.file_comment_length);
        stream.seek_to(SeekFrom::Start(next + skip))?;
    }

    Ok(())
}
