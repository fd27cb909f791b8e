pub mod charity {
    tonic::include_proto!("charity");
}

pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("charity_descriptor");
