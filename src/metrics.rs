use std::{
    collections::HashMap,
    sync::{Mutex, OnceLock},
};

use crate::domain::AccountStatus;

static METRICS: OnceLock<Mutex<MetricsState>> = OnceLock::new();

#[derive(Default)]
struct MetricsState {
    total: u64,
    errors: u64,
    per_endpoint: HashMap<&'static str, u64>,
    per_endpoint_err: HashMap<&'static str, u64>,
    // 上游成功/失败与时延统计（毫秒）
    upstream_ok: u64,
    upstream_err: u64,
    upstream_latency_sum_ms: u128,
    // 简易直方图分桶（毫秒）：<50, <100, <250, <500, <1000, >=1000
    upstream_hist_buckets: [u64; 6],
    // 分类结果
    classified: HashMap<&'static str, u64>,
}

fn state() -> std::sync::MutexGuard<'static, MetricsState> {
    let lock = METRICS.get_or_init(|| Mutex::new(MetricsState::default()));
    match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(), // 避免因锁污染导致 panic
    }
}

pub fn count_ok(endpoint: &'static str) {
    let mut s = state();
    s.total += 1;
    *s.per_endpoint.entry(endpoint).or_insert(0) += 1;
}

pub fn count_err(endpoint: &'static str) {
    let mut s = state();
    s.total += 1;
    s.errors += 1;
    *s.per_endpoint.entry(endpoint).or_insert(0) += 1;
    *s.per_endpoint_err.entry(endpoint).or_insert(0) += 1;
}

pub fn observe_upstream_latency_ms(latency_ms: u128, ok: bool) {
    let mut s = state();
    if ok {
        s.upstream_ok += 1;
    } else {
        s.upstream_err += 1;
    }
    s.upstream_latency_sum_ms += latency_ms;
    let b = if latency_ms < 50 {
        0
    } else if latency_ms < 100 {
        1
    } else if latency_ms < 250 {
        2
    } else if latency_ms < 500 {
        3
    } else if latency_ms < 1000 {
        4
    } else {
        5
    };
    s.upstream_hist_buckets[b] += 1;
}

pub fn inc_classification(status: AccountStatus) {
    let mut s = state();
    *s.classified.entry(status.as_str()).or_insert(0) += 1;
}

pub fn render_prometheus() -> String {
    let s = state();
    let mut out = String::new();
    out.push_str("# HELP ton_inspector_requests_total Total requests\n");
    out.push_str("# TYPE ton_inspector_requests_total counter\n");
    out.push_str(&format!("ton_inspector_requests_total {}\n", s.total));

    out.push_str("# HELP ton_inspector_errors_total Total error responses\n");
    out.push_str("# TYPE ton_inspector_errors_total counter\n");
    out.push_str(&format!("ton_inspector_errors_total {}\n", s.errors));

    out.push_str("# HELP ton_inspector_endpoint_requests_total Requests per endpoint\n");
    out.push_str("# TYPE ton_inspector_endpoint_requests_total counter\n");
    for (k, v) in s.per_endpoint.iter() {
        out.push_str(&format!(
            "ton_inspector_endpoint_requests_total{{endpoint=\"{}\"}} {}\n",
            k, v
        ));
    }

    out.push_str("# HELP ton_inspector_endpoint_errors_total Errors per endpoint\n");
    out.push_str("# TYPE ton_inspector_endpoint_errors_total counter\n");
    for (k, v) in s.per_endpoint_err.iter() {
        out.push_str(&format!(
            "ton_inspector_endpoint_errors_total{{endpoint=\"{}\"}} {}\n",
            k, v
        ));
    }

    // 上游统计
    out.push_str("# HELP ton_inspector_upstream_requests_total TonAPI requests\n");
    out.push_str("# TYPE ton_inspector_upstream_requests_total counter\n");
    out.push_str(&format!(
        "ton_inspector_upstream_requests_total{{result=\"ok\"}} {}\n",
        s.upstream_ok
    ));
    out.push_str(&format!(
        "ton_inspector_upstream_requests_total{{result=\"err\"}} {}\n",
        s.upstream_err
    ));

    out.push_str("# HELP ton_inspector_upstream_latency_ms_sum Sum of TonAPI latency in ms\n");
    out.push_str("# TYPE ton_inspector_upstream_latency_ms_sum counter\n");
    out.push_str(&format!(
        "ton_inspector_upstream_latency_ms_sum {}\n",
        s.upstream_latency_sum_ms
    ));

    out.push_str("# HELP ton_inspector_upstream_latency_ms_bucket TonAPI latency histogram buckets\n");
    out.push_str("# TYPE ton_inspector_upstream_latency_ms_bucket histogram\n");
    // 累积计数
    let bounds = [50, 100, 250, 500, 1000];
    let mut cumulative = 0u64;
    for (i, bound) in bounds.iter().enumerate() {
        cumulative += s.upstream_hist_buckets[i];
        out.push_str(&format!(
            "ton_inspector_upstream_latency_ms_bucket{{le=\"{}\"}} {}\n",
            bound, cumulative
        ));
    }
    out.push_str(&format!(
        "ton_inspector_upstream_latency_ms_bucket{{le=\"+Inf\"}} {}\n",
        s.upstream_hist_buckets.iter().sum::<u64>()
    ));

    out.push_str("# HELP ton_inspector_accounts_classified_total Classification results by status\n");
    out.push_str("# TYPE ton_inspector_accounts_classified_total counter\n");
    for status in [
        AccountStatus::Active,
        AccountStatus::Frozen,
        AccountStatus::Uninitialized,
    ] {
        out.push_str(&format!(
            "ton_inspector_accounts_classified_total{{status=\"{}\"}} {}\n",
            status,
            s.classified.get(status.as_str()).copied().unwrap_or(0)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_counters() {
        count_ok("GET /test/metrics");
        count_err("GET /test/metrics");
        observe_upstream_latency_ms(120, true);
        inc_classification(AccountStatus::Frozen);

        let text = render_prometheus();
        assert!(text.contains("endpoint=\"GET /test/metrics\""));
        assert!(text.contains("ton_inspector_upstream_latency_ms_bucket{le=\"+Inf\"}"));
        assert!(text.contains("ton_inspector_accounts_classified_total{status=\"frozen\"}"));
    }
}
