//! Rotating info-panel content.

/// One slide of the machine information panel.
#[derive(Debug, Clone, Copy)]
pub struct InfoSlide {
    pub title: &'static str,
    pub content: &'static str,
}

/// The fixed slide deck, rotated every few seconds by the dashboard.
pub const INFO_SLIDES: [InfoSlide; 5] = [
    InfoSlide {
        title: "About the Machine",
        content: "The blower set is industrial equipment built to deliver a high-pressure \
                  air stream for the production process. Maximum capacity is 5000 m³/h at \
                  pressures up to 1000 mbar, manufactured to international quality standards.",
    },
    InfoSlide {
        title: "How It Works",
        content: "A rotating impeller generates the air pressure. The electric motor drives \
                  the impeller at up to 3000 RPM while a digital control system keeps \
                  operation stable and efficient. Integrated pressure and temperature \
                  sensors monitor performance in real time.",
    },
    InfoSlide {
        title: "Maintenance",
        content: "Run a routine inspection every 500 operating hours. Replace the air filter \
                  every 1000 hours and check the oil level every 200 hours. Clean dust off \
                  the impeller every 3 months, calibrate the sensors every 6 months, and \
                  schedule a full yearly overhaul by trained technicians.",
    },
    InfoSlide {
        title: "Technical Specification",
        content: "Dimensions: 2.5 m × 1.8 m × 1.5 m. Weight: 850 kg. Power consumption: \
                  75 kW at 380 V / 3-phase. Maximum noise: 85 dB. Air-contact components \
                  are built from 316L stainless steel.",
    },
    InfoSlide {
        title: "Troubleshooting",
        content: "Falling air pressure: check the filter and look for leaks. Rising machine \
                  temperature: check the cooling circuit and oil level. Excessive vibration: \
                  check impeller balance and bearings. Machine will not start: check the \
                  power supply and the control system.",
    },
];

/// Index of the slide after `current`, wrapping.
pub fn next_slide(current: usize) -> usize {
    (current + 1) % INFO_SLIDES.len()
}
