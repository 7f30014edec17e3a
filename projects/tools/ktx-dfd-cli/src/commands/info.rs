use crate::error::CliError;
use crate::util::{existing_file_path, load_dfd, DfdSource};
use argh::FromArgs;
use bytesize::ByteSize;
use ktx_dfd::{
    component_info_unpacked, interpret, num_components, reconstruct_bytes_plane0, ChannelSlot,
    Dfd,
};
use ktx_dfd_ktx2::Ktx2Info;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Print the header, level index and data format descriptor of a KTX2 file
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// KTX2 file or raw descriptor to inspect
    #[argh(positional, from_str_fn(existing_file_path))]
    pub input: PathBuf,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), CliError> {
    let (dfd, source) = load_dfd(&cmd.input)?;

    println!("=== {} ===", cmd.input.display());
    if let DfdSource::Ktx2(info) = &source {
        print_ktx2_header(info);
    }

    println!("\n--- Data Format Descriptor ---");
    print!("{dfd}");
    print_summary(&dfd);
    Ok(())
}

fn print_ktx2_header(info: &Ktx2Info) {
    let scheme = match info.supercompression() {
        Some(scheme) => format!("{scheme:?}"),
        None => format!("vendor/unknown ({})", info.supercompression_scheme),
    };

    println!("vkFormat: {}", info.vk_format);
    println!("typeSize: {}", info.type_size);
    println!(
        "Dimensions: {}x{}x{}",
        info.pixel_width, info.pixel_height, info.pixel_depth
    );
    println!("Layers: {} Faces: {}", info.layer_count, info.face_count);
    println!("Supercompression: {scheme}");
    println!(
        "DFD: offset {} length {}",
        info.dfd.offset, info.dfd.length
    );
    println!(
        "KVD: offset {} length {}",
        info.kvd.offset, info.kvd.length
    );
    println!(
        "SGD: offset {} length {}",
        info.sgd.offset, info.sgd.length
    );

    println!("\n--- Level Index ({} levels) ---", info.level_count);
    for (level, entry) in info.levels.iter().enumerate() {
        println!(
            "Level {level}: offset {} length {} ({}) uncompressed {}",
            entry.byte_offset,
            entry.byte_length,
            ByteSize(entry.byte_length),
            ByteSize(entry.uncompressed_byte_length)
        );
    }
}

fn print_summary(dfd: &Dfd) {
    println!("\n--- Summary ---");
    println!("Components: {}", num_components(dfd));
    let component_info = component_info_unpacked(dfd);
    println!(
        "Unpacked component size: {} bytes",
        component_info.byte_length
    );
    println!(
        "Reconstructed bytesPlane0: {}",
        reconstruct_bytes_plane0(dfd)
    );

    match interpret(dfd) {
        Ok(format) => {
            let unit = if format.packed { "bits" } else { "bytes" };
            println!(
                "Interpretation: {:?}, {}, word size {} bytes",
                format.endianness,
                if format.packed { "packed" } else { "unpacked" },
                format.word_bytes
            );
            println!(
                "Flags: srgb={} normalized={} signed={} float={}",
                format.srgb, format.normalized, format.signed, format.float
            );
            for &slot in ChannelSlot::all_values() {
                let channel = format.channel(slot);
                if channel.size > 0 {
                    println!(
                        "{slot:?}: offset {} size {} {unit}",
                        channel.offset, channel.size
                    );
                }
            }
        }
        Err(error) => println!("Interpretation: unavailable ({error})"),
    }
}
