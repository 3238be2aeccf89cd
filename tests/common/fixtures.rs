//! Static CSV corpora used across harnesses.
//!
//! Each export mimics the shape of the crowdsourced spreadsheet: an
//! instruction row at line 0, some preamble, then the header and data rows.

/// The column header line in the spreadsheet's usual order.
pub const HEADER: &str = "GPU,CPU Model,Average FPS Score,Score,Ray Tracing,Upscaling,Screen Resolution,Graphics Settings,Frame Generation,Verdict";

/// Minimal export: instruction row, header, one run.
pub const EXPORT_MINIMAL: &str = "Please fill in one row per benchmark run\n\
GPU,CPU Model,Average FPS Score,Score,Ray Tracing,Upscaling,Screen Resolution,Graphics Settings,Frame Generation,Verdict\n\
RTX 4090,Intel Core i9-13900K,120.5,9500,High,DLSS,2560x1440,Ultra,Enabled,Excellent.\n";

/// Header drifted to line 4, reordered columns, quoted cells with commas,
/// blank cells and noise rows.
pub const EXPORT_MESSY: &str = "Instructions: one row per run. Do not edit the header.\n\
\n\
Last updated: March\n\
,,,,\n\
Verdict,GPU,CPU Model,Screen Resolution,Average FPS Score,Score,Upscaling,Ray Tracing,Graphics Settings,Frame Generation\n\
excellent.,MSI RTX 4070 Ti SUPER Gaming,AMD Ryzen 7 7800X3D,2560x1440,144,18000,DLSS 3.5,High,Ultra,Enabled\n\
good,\"Sapphire RX 7800 XT, Pulse\",AMD Ryzen 5 7600X,1920x1080,\"98.5\",14000,FSR 3,,High,\n\
,RTX 3060,Intel Core i5-12400F,1920x1080,60,8000,None,Off,Medium,Disabled\n\
meh,Intel Arc B580,Intel Core i5-13400F,1920x1080,abc,,idk,Off,Medium,Disabled\n\
bad,GeForce RTX 4060 Laptop GPU,Intel Core i7-13700H,1920x1080,72 fps,9000,,Low,High,Disabled\n\
Poor,RTX 3060,,1920x1080,40,5000,None,Off,Low,Disabled\n\
great,RTX 4090,Intel Core i9-14900K,3840x2160,165,25000,DLSS,Ultra,Ultra,Enabled\n\
\n";

/// An export where no header appears in the scan window; the fallback index
/// lands on line 7.
pub fn export_with_fallback_header() -> String {
    let mut lines: Vec<String> = (0..7).map(|i| format!("preamble line {i}")).collect();
    lines.push("GPU,CPU Model,Average FPS Score".into());
    lines.push("RTX 4080,Ryzen 9 7950X3D,130".into());
    lines.join("\n")
}

/// Synthetic export of `rows` runs cycling through a handful of GPUs, CPUs,
/// resolutions and technologies.
pub fn export_high_volume(rows: usize) -> String {
    const GPUS: &[&str] = &[
        "RTX 4090",
        "ASUS RTX 4070 SUPER Dual",
        "RX 7900 XTX",
        "Sapphire RX 6700 XT",
        "Intel Arc A770",
        "RTX 3080 Ti",
    ];
    const CPUS: &[&str] = &[
        "AMD Ryzen 7 7800X3D",
        "Intel Core i7-13700K",
        "AMD Ryzen 5 5600X",
        "Intel Core i5-12600K",
    ];
    const RESOLUTIONS: &[&str] = &["1920x1080", "2560x1440", "3440x1440", "3840x2160"];
    const UPSCALING: &[&str] = &["DLSS Quality", "FSR 2", "None", "XeSS", "idk"];

    let mut out = String::from("Instructions row\n");
    out.push_str(HEADER);
    out.push('\n');
    for i in 0..rows {
        out.push_str(&format!(
            "{},{},{}.{},{},{},{},{},{},{},{}\n",
            GPUS[i % GPUS.len()],
            CPUS[i % CPUS.len()],
            20 + (i * 7) % 160,
            i % 10,
            5000 + (i * 13) % 20000,
            ["Off", "Low", "High"][i % 3],
            UPSCALING[i % UPSCALING.len()],
            RESOLUTIONS[i % RESOLUTIONS.len()],
            ["Medium", "High", "Ultra"][i % 3],
            ["Enabled", "Disabled"][i % 2],
            ["Excellent", "good.", "Average", "bad"][i % 4],
        ));
    }
    out
}
