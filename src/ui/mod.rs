use crate::waveform::WaveformRequest;

pub fn print_banner(request: &WaveformRequest) {
    println!("waveplot-rs");
    println!(
        "amplitude {} | frequency {} Hz | sampling rate {} Hz | {} samples",
        request.amplitude,
        request.frequency,
        request.sampling_rate,
        request.num_samples
    );
    println!();
}
