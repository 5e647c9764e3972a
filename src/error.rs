use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error",
    BadCoordinate{raw: String} = "unparseable coordinate pair: {raw}",
    CoordinateRange{lat: f64, lng: f64} = "coordinates out of range: {lat},{lng}",
    BadLayout{raw: String} = "unknown layout: {raw}",
    EmptyDirectory = "unit directory is empty"
}

// Position failures are absorbed by the finder and never surface to the
// visitor; only the operator log sees them.
custom_error! {pub PositionError
    Denied = "position permission denied",
    Timeout = "position request timed out",
    Unavailable = "no position source available"
}
