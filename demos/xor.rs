use ferrite_mlp::{train_epoch, Network, Sample};

fn main() {
    let mut network = Network::new(2, 3, 1, 0.7).expect("valid layer sizes");

    let samples = vec![
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![0.0, 0.0], vec![0.0]),
    ];

    let epochs = 10000;

    for epoch in 0..epochs {
        let loss = train_epoch(&mut network, &samples).expect("sample sizes match the network");
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: loss = {loss:.6}");
        }
    }

    for sample in &samples {
        let output = network.forward(&sample.input).expect("input size matches the network");
        println!("Input: {:?} -> Output: {:.4}", sample.input, output[(0, 0)]);
    }
    println!("\nW1:\n{}\nW2:\n{}", network.w1(), network.w2());
}
