//! CSV rendering of sweep series.

use tj_sweep::CycleSeries;

pub const HEADER: &str = "tit_k,opr,specific_thrust,tsfc,thrust_to_weight_index";

/// One row per feasible point; skipped points leave no row.
pub fn render(series: &[CycleSeries]) -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for s in series {
        for i in 0..s.len() {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                s.turbine_inlet_k,
                s.pressure_ratio[i],
                s.specific_thrust[i],
                s.tsfc[i],
                s.thrust_to_weight_index[i]
            ));
        }
    }
    csv
}
