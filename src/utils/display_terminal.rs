//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 `ServiceRegistry`가 컴포넌트를 조립하는 과정을 단계별로 출력합니다.
//! 로그 레벨과 무관하게 항상 표준 출력에 표시됩니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               🔧 SERVICE REGISTRY                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{border}╗\n║{:^width$}║\n╚{border}╝", title, width = BOX_WIDTH)
}

/// 조립 단계 시작
///
/// ```text
/// → Step 1: Connecting user store
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 조립 단계 완료와 해당 단계에서 만든 컴포넌트 수
///
/// ```text
/// ✓ Step 1: User store ready (1 components)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} components)", step, description, count);
}

/// 단계 내부의 개별 컴포넌트 상태
///
/// ```text
///    ├─ MongoDB: marketplace
///    ├─ Redis: Connected
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 조립 완료 요약
pub fn print_final_summary(stores: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Stores: {}", stores);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", stores + services);
    println!();
}
