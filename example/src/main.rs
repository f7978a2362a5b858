mod vec3;
mod scenarios;

use resarr_log::info;

fn main() {
    resarr_log::init();
    if cfg!(feature = "array") {
        scenarios::fixed_arrays();
    }
    if cfg!(feature = "vector") {
        scenarios::names();
    }
    if cfg!(feature = "vec3") {
        let vectors = scenarios::vectors();
        info!("{} vector(s) left, capacity {}, {:?}", vectors.len(), vectors.capacity(), vectors.stats());
        drop(vectors);
        let census = vec3::census();
        info!(
            "constructed {} default, {} scalar, {} float; {} copies, {} destroyed",
            census.defaulted, census.scalar, census.triple, census.cloned, census.dropped,
        );
    }
}
