use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use speech_sdk::{
    audio::{decode_base64, decode_base64_pcm, decode_pcm, encode_wav, AudioBuffer, WavFile},
    SpeechError,
};

fn le_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
}

#[test]
fn base64_round_trips_arbitrary_byte_sequences() {
    let cases: &[&[u8]] = &[
        &[],
        &[0],
        &[0xff],
        &[1, 2, 3],
        &[0, 127, 128, 255, 64],
        b"interleaved 16-bit PCM audio data",
    ];
    for &bytes in cases {
        let encoded = BASE64_STANDARD.encode(bytes);
        assert_eq!(
            decode_base64(&encoded).unwrap(),
            bytes,
            "round trip failed for {bytes:?}"
        );
    }
}

#[test]
fn base64_rejects_characters_outside_the_alphabet() {
    let err = decode_base64("ab!d").unwrap_err();
    assert!(matches!(err, SpeechError::MalformedPayload(_)));
}

#[test]
fn base64_rejects_structurally_invalid_padding() {
    // Length 5 cannot occur in valid base64 (must be a multiple of 4 after
    // padding).
    let err = decode_base64("AAAAA").unwrap_err();
    assert!(matches!(err, SpeechError::MalformedPayload(_)));

    let err = decode_base64("A===").unwrap_err();
    assert!(matches!(err, SpeechError::MalformedPayload(_)));
}

#[test]
fn pcm_decode_normalizes_mono_samples() {
    let bytes = le_bytes(&[0, 16384, -32768, 32767]);
    let buffer = decode_pcm(&bytes, 24_000, 1).unwrap();

    assert_eq!(buffer.sample_rate(), 24_000);
    assert_eq!(buffer.channel_count(), 1);
    assert_eq!(buffer.frame_count(), 4);

    let samples = buffer.channel(0).unwrap();
    assert_eq!(samples[0], 0.0);
    assert_eq!(samples[1], 0.5);
    assert_eq!(samples[2], -1.0);
    // 32767 / 32768 never reaches +1.0 exactly.
    assert_eq!(samples[3], 32767.0 / 32768.0);
    assert!(samples.iter().all(|&s| (-1.0..1.0).contains(&s)));
}

#[test]
fn pcm_decode_deinterleaves_stereo_frames() {
    // Three frames of (left, right) pairs.
    let bytes = le_bytes(&[100, -100, 200, -200, 300, -300]);
    let buffer = decode_pcm(&bytes, 44_100, 2).unwrap();

    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.frame_count(), 3);
    let left = buffer.channel(0).unwrap();
    let right = buffer.channel(1).unwrap();
    assert_eq!(left, [100.0 / 32768.0, 200.0 / 32768.0, 300.0 / 32768.0]);
    assert_eq!(
        right,
        [-100.0 / 32768.0, -200.0 / 32768.0, -300.0 / 32768.0]
    );
}

#[test]
fn pcm_decode_truncates_a_trailing_partial_frame() {
    // Five bytes of mono audio: two whole frames, one stray byte.
    let buffer = decode_pcm(&[1, 0, 2, 0, 3], 24_000, 1).unwrap();
    assert_eq!(buffer.frame_count(), 2);

    // Six bytes of stereo audio: one whole frame, half a frame left over.
    let buffer = decode_pcm(&le_bytes(&[10, 20, 30]), 24_000, 2).unwrap();
    assert_eq!(buffer.frame_count(), 1);
    assert_eq!(buffer.channel(0).unwrap(), [10.0 / 32768.0]);
    assert_eq!(buffer.channel(1).unwrap(), [20.0 / 32768.0]);
}

#[test]
fn pcm_decode_of_empty_input_yields_an_empty_buffer() {
    let buffer = decode_pcm(&[], 24_000, 1).unwrap();
    assert_eq!(buffer.frame_count(), 0);
    assert!(buffer.is_empty());
}

#[test]
fn pcm_decode_rejects_bad_parameters() {
    assert!(matches!(
        decode_pcm(&[0, 0], 24_000, 0).unwrap_err(),
        SpeechError::InvalidChannelConfiguration(_)
    ));
    assert!(matches!(
        decode_pcm(&[0, 0], 0, 1).unwrap_err(),
        SpeechError::InvalidSampleRate(0)
    ));
}

#[test]
fn base64_pcm_decode_composes_both_steps() {
    let payload = BASE64_STANDARD.encode(le_bytes(&[0, -16384, 16384]));
    let buffer = decode_base64_pcm(&payload, 24_000, 1).unwrap();
    assert_eq!(buffer.channel(0).unwrap(), [0.0, -0.5, 0.5]);
}

#[test]
fn audio_buffer_rejects_ragged_channels() {
    let err = AudioBuffer::from_channels(24_000, vec![vec![0.0, 0.0], vec![0.0]]).unwrap_err();
    assert!(matches!(err, SpeechError::InvalidChannelConfiguration(_)));
}

#[test]
fn audio_buffer_rejects_zero_sample_rate() {
    let err = AudioBuffer::from_channels(0, vec![vec![0.0]]).unwrap_err();
    assert!(matches!(err, SpeechError::InvalidSampleRate(0)));
}

#[test]
fn empty_buffer_encodes_to_a_valid_44_byte_file() {
    let buffer = AudioBuffer::mono(24_000, vec![]).unwrap();
    let wav = encode_wav(&buffer).unwrap();

    assert_eq!(wav.len(), WavFile::HEADER_LEN);
    assert!(wav.is_empty());
    assert_eq!(u32_at(wav.as_bytes(), 4), 36); // ChunkSize
    assert_eq!(u32_at(wav.as_bytes(), 40), 0); // Subchunk2Size
}

#[test]
fn known_samples_encode_to_known_bytes() {
    let buffer = AudioBuffer::mono(24_000, vec![1.0, -1.0, 0.0]).unwrap();
    let wav = encode_wav(&buffer).unwrap();

    assert_eq!(wav.len(), 50);
    assert_eq!(wav.pcm_data(), le_bytes(&[32767, -32768, 0]));
}

#[test]
fn header_fields_are_byte_exact_for_stereo() {
    let buffer =
        AudioBuffer::from_channels(44_100, vec![vec![0.0, 0.5], vec![0.5, 0.0]]).unwrap();
    let wav = encode_wav(&buffer).unwrap();
    let bytes = wav.as_bytes();

    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(u32_at(bytes, 4), 36 + 8); // 2 frames * 2 channels * 2 bytes
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(&bytes[12..16], b"fmt ");
    assert_eq!(u32_at(bytes, 16), 16); // Subchunk1Size
    assert_eq!(u16_at(bytes, 20), 1); // AudioFormat: PCM
    assert_eq!(u16_at(bytes, 22), 2); // NumChannels
    assert_eq!(u32_at(bytes, 24), 44_100); // SampleRate
    assert_eq!(u32_at(bytes, 28), 44_100 * 4); // ByteRate
    assert_eq!(u16_at(bytes, 32), 4); // BlockAlign
    assert_eq!(u16_at(bytes, 34), 16); // BitsPerSample
    assert_eq!(&bytes[36..40], b"data");
    assert_eq!(u32_at(bytes, 40), 8);
    assert_eq!(wav.len(), 44 + 8);
}

#[test]
fn encoder_interleaves_frame_major() {
    let buffer = AudioBuffer::from_channels(
        24_000,
        vec![vec![100.0 / 32767.0, 200.0 / 32767.0], vec![-1.0, -1.0]],
    )
    .unwrap();
    let wav = encode_wav(&buffer).unwrap();
    assert_eq!(wav.pcm_data(), le_bytes(&[100, -32768, 200, -32768]));
}

#[test]
fn out_of_range_samples_clamp_instead_of_wrapping() {
    let loud = AudioBuffer::mono(24_000, vec![1.5, -2.0]).unwrap();
    let full_scale = AudioBuffer::mono(24_000, vec![1.0, -1.0]).unwrap();
    assert_eq!(
        encode_wav(&loud).unwrap().as_bytes(),
        encode_wav(&full_scale).unwrap().as_bytes()
    );
}

#[test]
fn encoding_is_deterministic() {
    let buffer = AudioBuffer::mono(24_000, vec![0.1, -0.2, 0.3, -0.4]).unwrap();
    assert_eq!(encode_wav(&buffer).unwrap(), encode_wav(&buffer).unwrap());
}

#[test]
fn decode_encode_decode_round_trips_within_quantization_tolerance() {
    // Asymmetric quantization scales (decode by 32768, encode positives by
    // 32767) keep the round trip within one encoder step per sample.
    let original = AudioBuffer::from_channels(
        24_000,
        vec![
            vec![0.0, 0.25, -0.25, 0.9999, -1.0, 32767.0 / 32768.0],
            vec![0.5, -0.5, 0.125, -0.9999, 1.0, -32767.0 / 32768.0],
        ],
    )
    .unwrap();

    let wav = encode_wav(&original).unwrap();
    let decoded = decode_pcm(
        wav.pcm_data(),
        original.sample_rate(),
        original.channel_count(),
    )
    .unwrap();

    assert_eq!(decoded.frame_count(), original.frame_count());
    let tolerance = 1.0 / 32767.0;
    for (channel, decoded_channel) in original.channels().iter().zip(decoded.channels()) {
        for (&a, &b) in channel.iter().zip(decoded_channel) {
            assert!(
                (a - b).abs() <= tolerance,
                "sample {a} decoded as {b}, outside tolerance {tolerance}"
            );
        }
    }
}
