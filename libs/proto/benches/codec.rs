//! Build, encode, and decode throughput for the hottest message shapes.
//!
//! The data message with a couple of attachments is the workhorse payload;
//! the full-stack case measures what one delivery actually costs end to end.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use courier_proto::{
    AttachmentPointer, Content, DataMessage, Envelope, EnvelopeType, Message,
};

fn typical_data_message() -> DataMessage {
    let photo = AttachmentPointer::builder()
        .set_content_type("image/jpeg")
        .set_key(vec![0x11; 64])
        .set_digest(vec![0x22; 32])
        .set_size(190_000)
        .set_file_name("photo.jpg")
        .set_cdn_number(2)
        .build()
        .unwrap();
    let video = AttachmentPointer::builder()
        .set_content_type("video/mp4")
        .set_key(vec![0x33; 64])
        .set_digest(vec![0x44; 32])
        .set_size(8_400_000)
        .set_cdn_number(2)
        .build()
        .unwrap();

    DataMessage::builder()
        .set_body("two from the weekend, the rest are uploading")
        .set_timestamp(1_700_000_000_000)
        .add_attachments(&photo)
        .add_attachments(&video)
        .build()
        .unwrap()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_data_message", |b| {
        b.iter(|| {
            black_box(
                DataMessage::builder()
                    .set_body(black_box("two from the weekend"))
                    .set_timestamp(black_box(1_700_000_000_000))
                    .build()
                    .unwrap(),
            )
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let message = typical_data_message();
    c.bench_function("encode_data_message", |b| {
        b.iter(|| black_box(message.encode()))
    });
}

fn bench_decode(c: &mut Criterion) {
    let bytes = typical_data_message().encode();
    c.bench_function("decode_data_message", |b| {
        b.iter(|| DataMessage::decode(black_box(&bytes)).unwrap())
    });
}

fn bench_full_stack(c: &mut Criterion) {
    let content = Content::builder()
        .set_data_message(&typical_data_message())
        .build()
        .unwrap();
    let envelope = Envelope::builder(1_700_000_000_000)
        .set_envelope_type(EnvelopeType::Ciphertext)
        .set_content(content.encode())
        .build()
        .unwrap();
    let bytes = envelope.encode();

    c.bench_function("decode_full_stack", |b| {
        b.iter(|| {
            let envelope = Envelope::decode(black_box(&bytes)).unwrap();
            let content = Content::decode(envelope.content().unwrap()).unwrap();
            black_box(content.data_message().unwrap().attachments().len())
        })
    });
}

criterion_group!(benches, bench_build, bench_encode, bench_decode, bench_full_stack);
criterion_main!(benches);
