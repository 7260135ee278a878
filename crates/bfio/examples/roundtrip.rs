use std::{collections::BTreeMap, fs::File, path::Path};

use bfio::{DynamicBuffer, FileStream, FixedBuffer, Seekable, SinkExt, SourceExt};

#[derive(Debug, Default, PartialEq)]
struct MyData {
    names: BTreeMap<i32, String>,
    label: String,
    samples: Vec<(String, f32)>,
    slots: [i32; 10],
}

bfio::aggregate! {
    MyData {
        names: BTreeMap<i32, String>,
        label: String,
        samples: Vec<(String, f32)>,
        slots: [i32; 10],
    }
}

fn sample() -> MyData {
    let mut data = MyData {
        label: "asdasd".to_string(),
        ..Default::default()
    };
    data.names.insert(1, "asd".to_string());
    data.names.insert(3, "test".to_string());
    data.samples.push(("asd".to_string(), 7.8));
    data.samples.push(("asd".to_string(), 7.8));
    data.slots[0] = -3;
    data.slots[1] = 1;
    data
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = sample();
    println!("Encoded size: {} bytes", bfio::encoded_size(&data)?);

    // File
    let path = Path::new("roundtrip.bin");
    {
        let mut stream = FileStream::new(File::create(path)?);
        stream.put(&data)?;
        stream.put("asdasd")?;
        stream.flush()?;
    }
    {
        let mut stream = FileStream::new(File::open(path)?);
        let decoded: MyData = stream.get()?;
        let trailer: String = stream.get()?;
        assert_eq!(decoded, data);
        println!("File: {decoded:?} + {trailer:?}");
    }
    std::fs::remove_file(path)?;

    // Growable memory
    let mut buffer = DynamicBuffer::new();
    buffer.put(&data)?;
    buffer.put("asdasd")?;
    println!(
        "DynamicBuffer: len = {}, reserved = {}",
        buffer.len(),
        buffer.reserved()
    );
    buffer.rewind();
    let decoded: MyData = buffer.get()?;
    let trailer: String = buffer.get()?;
    assert_eq!(decoded, data);
    assert_eq!(trailer, "asdasd");

    // Caller-owned memory
    let mut storage = vec![0u8; 512];
    let mut buffer = FixedBuffer::new(&mut storage);
    buffer.put(&data)?;
    buffer.put("asdasd")?;
    let used = buffer.tell();
    buffer.rewind();
    let decoded: MyData = buffer.get()?;
    assert_eq!(decoded, data);
    println!("FixedBuffer: {used} of {} bytes used", buffer.len());

    Ok(())
}
